// src/config.rs

use std::time::Duration;

use crate::model::QuizSettings;

pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
pub const DEFAULT_QUESTION_TIME: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    /// Time allowed per question; also the value the countdown resets to.
    pub question_time: Duration,
    pub settings: QuizSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            question_time: DEFAULT_QUESTION_TIME,
            settings: QuizSettings::default(),
        }
    }
}

impl AppConfig {
    /// Configuration for the running platform, with the endpoint override applied.
    pub fn load() -> Self {
        let endpoint = resolve_endpoint();
        log::info!("Using trivia endpoint {endpoint}");
        Self {
            endpoint,
            ..Self::default()
        }
    }

    pub fn with_endpoint(self, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self
        }
    }

    pub fn with_question_time(self, question_time: Duration) -> Self {
        Self {
            question_time,
            ..self
        }
    }

    pub fn question_seconds(&self) -> u32 {
        self.question_time.as_secs().max(1) as u32
    }
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_endpoint() -> String {
    std::env::var("QUIZ_BATTLE_API_ENDPOINT")
        .ok()
        .as_deref()
        .and_then(normalize_endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn resolve_endpoint() -> String {
    endpoint_from_build_env()
        .or_else(endpoint_from_querystring)
        .or_else(endpoint_from_meta)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_build_env() -> Option<String> {
    option_env!("QUIZ_BATTLE_API_ENDPOINT").and_then(normalize_endpoint)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "api_endpoint" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_endpoint(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='quiz-battle-api-endpoint']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_endpoint)
}
