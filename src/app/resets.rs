use super::*;
use crate::model::Difficulty;

impl QuizApp {
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.apply_settings(self.settings.with_difficulty(difficulty));
    }

    /// Takes whatever the count input holds; it is coerced into the valid range.
    pub fn set_question_count(&mut self, count: i64) {
        self.apply_settings(self.settings.with_count(count));
    }

    /// Count input edits. Only a committed value (drag released, focus lost)
    /// reaches the settings, so dragging through values fetches once.
    pub fn edit_question_count(&mut self, value: i64, commit: bool) {
        self.count_draft = value;
        if commit {
            self.set_question_count(value);
            self.count_draft = i64::from(self.settings.count());
        }
    }

    /// Any real change discards the running session and goes back to loading.
    fn apply_settings(&mut self, settings: QuizSettings) {
        if settings == self.settings {
            return;
        }
        log::debug!(
            "Settings changed to {} x{}, discarding current session",
            settings.difficulty,
            settings.count()
        );
        self.settings = settings;
        self.discard_session();
    }

    /// New run with the same settings, from the end screen.
    pub fn play_again(&mut self) {
        self.discard_session();
    }

    fn discard_session(&mut self) {
        self.fetch_rx = None;
        self.phase = Phase::Loading { request: None };
    }
}
