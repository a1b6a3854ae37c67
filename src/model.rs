use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound the trivia service accepts for `amount` in a single request.
pub const MAX_QUESTIONS: u32 = 50;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Value sent in the `difficulty` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to ask the trivia service for. The count is always in `1..=MAX_QUESTIONS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    pub difficulty: Difficulty,
    count: u32,
}

impl QuizSettings {
    pub fn new(difficulty: Difficulty, count: i64) -> Self {
        Self {
            difficulty,
            count: coerce_count(count),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    pub fn with_count(self, count: i64) -> Self {
        Self {
            count: coerce_count(count),
            ..self
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::new(Difficulty::Easy, 3)
    }
}

fn coerce_count(count: i64) -> u32 {
    count.clamp(1, MAX_QUESTIONS as i64) as u32
}

/// A normalized multiple-choice question. `answers` holds `correct_answer` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub text: String,
    pub correct_answer: String,
    pub answers: Vec<String>,
}

impl Question {
    /// Case-insensitive match against the correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.to_lowercase() == self.correct_answer.to_lowercase()
    }
}
