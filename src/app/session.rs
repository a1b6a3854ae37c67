// src/app/session.rs

use web_time::Instant;

use crate::app::countdown::{Countdown, TimerToken};
use crate::error::SessionError;
use crate::model::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Answering,
    Revealed,
    Ended,
}

/// What an `advance` led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advanced {
    NextQuestion(usize),
    Ended,
}

/// One run of the quiz over a fetched batch. Only the transition methods
/// below mutate it.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    question_seconds: u32,
    countdown: Countdown,
    pending_answer: Option<String>,
    result_message: Option<String>,
    phase: SessionPhase,
}

impl QuizSession {
    /// Data loaded: start at the first question with a full countdown.
    /// An empty batch ends straight away.
    pub fn new(questions: Vec<Question>, question_seconds: u32, now: Instant) -> Self {
        let mut countdown = Countdown::start(question_seconds, now);
        let phase = if questions.is_empty() {
            countdown.cancel();
            SessionPhase::Ended
        } else {
            SessionPhase::Answering
        };

        Self {
            questions,
            current_index: 0,
            score: 0,
            question_seconds,
            countdown,
            pending_answer: None,
            result_message: None,
            phase,
        }
    }

    pub fn select_answer(&mut self, answer: impl Into<String>) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Answering => {
                self.pending_answer = Some(answer.into());
                Ok(())
            }
            SessionPhase::Revealed => Err(SessionError::AlreadyRevealed),
            SessionPhase::Ended => Err(SessionError::Ended),
        }
    }

    /// Reveals the result for the current question. Returns whether it was correct.
    pub fn check_answer(&mut self) -> Result<bool, SessionError> {
        match self.phase {
            SessionPhase::Answering => {}
            SessionPhase::Revealed => return Err(SessionError::AlreadyRevealed),
            SessionPhase::Ended => return Err(SessionError::Ended),
        }

        let question = &self.questions[self.current_index];
        let correct = self
            .pending_answer
            .as_deref()
            .is_some_and(|answer| question.is_correct(answer));

        self.result_message = Some(if correct {
            self.score += 1;
            "Correct!".to_string()
        } else {
            format!(
                "Incorrect! The correct answer is: {}",
                question.correct_answer
            )
        });
        self.phase = SessionPhase::Revealed;

        Ok(correct)
    }

    /// The "Next Question" action; only available once the result is shown.
    pub fn next_question(&mut self, now: Instant) -> Result<Advanced, SessionError> {
        match self.phase {
            SessionPhase::Revealed => Ok(self.advance(now)),
            SessionPhase::Answering => Err(SessionError::NotRevealed),
            SessionPhase::Ended => Err(SessionError::Ended),
        }
    }

    /// Polls the countdown; on expiry moves on exactly like "Next" would.
    pub fn tick(&mut self, now: Instant) -> Option<Advanced> {
        if self.phase == SessionPhase::Ended {
            return None;
        }
        let token = self.countdown.poll(now)?;
        self.expire(token, now)
    }

    /// Advances for an expired countdown, unless `token` belongs to a countdown
    /// that has since been reset or the session is already over.
    pub fn expire(&mut self, token: TimerToken, now: Instant) -> Option<Advanced> {
        if self.phase == SessionPhase::Ended || token != self.countdown.token() {
            log::debug!("Ignoring stale countdown expiry {token:?}");
            return None;
        }
        log::debug!("Time is up on question {}", self.current_index + 1);
        Some(self.advance(now))
    }

    fn advance(&mut self, now: Instant) -> Advanced {
        self.pending_answer = None;
        self.result_message = None;

        if self.current_index + 1 >= self.questions.len() {
            self.current_index = self.questions.len();
            self.phase = SessionPhase::Ended;
            self.countdown.cancel();
            return Advanced::Ended;
        }

        self.current_index += 1;
        self.phase = SessionPhase::Answering;
        self.countdown.reset(self.question_seconds, now);
        Advanced::NextQuestion(self.current_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == SessionPhase::Revealed
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn pending_answer(&self) -> Option<&str> {
        self.pending_answer.as_deref()
    }

    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}
