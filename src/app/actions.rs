use web_time::Instant;

use super::*;
use crate::error::SessionError;

impl QuizApp {
    pub fn select_answer(&mut self, answer: &str) -> Result<(), SessionError> {
        match self.session_mut() {
            Some(session) => session.select_answer(answer),
            None => Ok(()),
        }
    }

    pub fn check_answer(&mut self) -> Result<bool, SessionError> {
        let Some(session) = self.session_mut() else {
            return Ok(false);
        };
        let correct = session.check_answer()?;
        log::debug!(
            "Question {} checked: {} (score {})",
            session.current_index() + 1,
            if correct { "correct" } else { "incorrect" },
            session.score()
        );
        Ok(correct)
    }

    pub fn next_question(&mut self, now: Instant) -> Result<(), SessionError> {
        let Some(session) = self.session_mut() else {
            return Ok(());
        };
        let advanced = session.next_question(now)?;
        self.log_advance(advanced);
        Ok(())
    }

    /// Drives the countdown; call once per frame.
    pub fn tick(&mut self, now: Instant) {
        let advanced = self.session_mut().and_then(|session| session.tick(now));
        if let Some(advanced) = advanced {
            self.log_advance(advanced);
        }
    }

    fn log_advance(&self, advanced: Advanced) {
        let Some(session) = self.session() else {
            return;
        };
        match advanced {
            Advanced::NextQuestion(i) => {
                log::debug!("Moving on to question {} of {}", i + 1, session.total())
            }
            Advanced::Ended => log::info!(
                "Quiz ended with score {} / {}",
                session.score(),
                session.total()
            ),
        }
    }
}
