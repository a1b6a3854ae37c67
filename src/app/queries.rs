use super::*;

impl QuizApp {
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.phase {
            Phase::Running(session) => Some(session),
            Phase::Loading { .. } => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.phase {
            Phase::Running(session) => Some(session),
            Phase::Loading { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn is_ended(&self) -> bool {
        self.session().is_some_and(QuizSession::is_ended)
    }
}
