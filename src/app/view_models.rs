// src/app/view_models.rs

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub score: u32,
    pub total: usize,
}

impl ScoreLine {
    pub fn label(&self) -> String {
        format!("Score: {} / {}", self.score, self.total)
    }

    pub fn final_label(&self) -> String {
        format!("Your Score: {} / {}", self.score, self.total)
    }
}

/// Everything the quiz view needs to draw the current round.
#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub category: String,
    pub text: String,
    pub answers: Vec<String>,
    pub selected: Option<String>,
    pub time_remaining: u32,
    pub revealed: bool,
    pub result_message: Option<String>,
}

impl QuestionView {
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    pub fn timer_label(&self) -> String {
        format!("Time Left: {} seconds", self.time_remaining)
    }

    pub fn can_check(&self) -> bool {
        !self.revealed
    }

    pub fn can_advance(&self) -> bool {
        self.revealed
    }
}

impl QuizApp {
    pub fn score_line(&self) -> Option<ScoreLine> {
        self.session().map(|s| ScoreLine {
            score: s.score(),
            total: s.total(),
        })
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        let session = self.session()?;
        let question = session.current_question()?;

        Some(QuestionView {
            number: session.current_index() + 1,
            total: session.total(),
            category: question.category.clone(),
            text: question.text.clone(),
            answers: question.answers.clone(),
            selected: session.pending_answer().map(str::to_owned),
            time_remaining: session.time_remaining(),
            revealed: session.is_revealed(),
            result_message: session.result_message().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::tests::batch;
    use web_time::Instant;

    #[test]
    fn view_tracks_the_round() {
        let mut app = QuizApp::default();
        let ticket = app.begin_request();
        app.on_questions_loaded(ticket.id, Ok(batch(2)), Instant::now());

        let view = app.question_view().unwrap();
        assert_eq!(view.progress_label(), "Question 1 of 2");
        assert_eq!(view.timer_label(), "Time Left: 60 seconds");
        assert!(view.can_check());
        assert!(!view.can_advance());

        app.select_answer("Right 1").unwrap();
        app.check_answer().unwrap();
        let view = app.question_view().unwrap();
        assert_eq!(view.selected.as_deref(), Some("Right 1"));
        assert!(!view.can_check());
        assert!(view.can_advance());
        assert_eq!(view.result_message.as_deref(), Some("Correct!"));
        assert_eq!(app.score_line().unwrap().label(), "Score: 1 / 2");
    }

    #[test]
    fn nothing_to_show_while_loading() {
        let app = QuizApp::default();
        assert!(app.question_view().is_none());
        assert!(app.score_line().is_none());
    }
}
