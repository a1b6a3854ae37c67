use std::sync::mpsc::Receiver;

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::model::{Question, QuizSettings};

pub mod actions;
pub mod countdown;
pub mod loading;
pub mod queries;
pub mod resets;
pub mod session;
pub mod view_models;

#[cfg(test)]
mod scenarios;

pub use countdown::{Countdown, TimerToken};
pub use session::{Advanced, QuizSession, SessionPhase};
pub use view_models::{QuestionView, ScoreLine};

/// Result of one fetch, tagged with the id of the request that produced it.
pub type FetchOutcome = (u64, Result<Vec<Question>, FetchError>);

/// Where the controller is. `Loading { request: None }` means a fetch still has
/// to be dispatched on the next frame.
#[derive(Debug)]
pub enum Phase {
    Loading { request: Option<u64> },
    Running(QuizSession),
}

/// Owns every piece of quiz state and drives the transitions.
pub struct QuizApp {
    pub config: AppConfig,
    pub settings: QuizSettings,
    pub phase: Phase,
    /// What the count input shows while it is being edited.
    pub count_draft: i64,
    next_request_id: u64,
    fetch_rx: Option<Receiver<FetchOutcome>>,
}

impl QuizApp {
    pub fn new(config: AppConfig) -> Self {
        let settings = config.settings;
        Self {
            config,
            settings,
            phase: Phase::Loading { request: None },
            count_draft: i64::from(settings.count()),
            next_request_id: 0,
            fetch_rx: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
