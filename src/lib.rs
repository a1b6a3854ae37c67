pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod trivia;
pub mod ui;

pub use app::QuizApp;
pub use config::AppConfig;
