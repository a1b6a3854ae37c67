//! Question source: talks to the trivia service and normalizes what comes back.

pub mod api;
pub mod entities;
pub mod shuffle;

pub use api::{build_url, fetch_questions, parse_response};
pub use entities::decode_entities;
pub use shuffle::shuffle;
