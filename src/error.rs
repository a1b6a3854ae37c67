//! Error types for fetching questions and driving a quiz session.

use thiserror::Error;

/// Errors emitted while fetching a batch of questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("request to trivia service failed")]
    Network(#[from] reqwest::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("request to trivia service failed: {0}")]
    Network(String),
    #[error("trivia service returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed trivia response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("trivia service rejected the request (code {code}): {reason}")]
    Api { code: u32, reason: &'static str },
    #[error("trivia service returned no questions")]
    Empty,
}

/// A trigger that is not legal in the session's current phase.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the answer for this question was already checked")]
    AlreadyRevealed,
    #[error("check the answer before moving on")]
    NotRevealed,
    #[error("the quiz has ended")]
    Ended,
}
