// src/trivia/api.rs

use rand::Rng;
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{Question, QuizSettings};
use crate::trivia::entities::decode_entities;
use crate::trivia::shuffle::shuffle;

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: u32,
    results: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    category: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Builds the GET url for a batch, keeping any query the endpoint already has.
pub fn build_url(endpoint: &str, settings: &QuizSettings) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{endpoint}{separator}amount={}&difficulty={}&type=multiple",
        settings.count(),
        settings.difficulty.as_str()
    )
}

fn api_failure(code: u32) -> FetchError {
    let reason = match code {
        1 => "not enough questions for this query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited, wait a few seconds",
        _ => "unknown response code",
    };
    FetchError::Api { code, reason }
}

/// Parses a service response into shuffled, entity-decoded questions.
pub fn parse_response<R: Rng + ?Sized>(body: &str, rng: &mut R) -> Result<Vec<Question>, FetchError> {
    let response: TriviaResponse = serde_json::from_str(body)?;

    if response.response_code != 0 {
        return Err(api_failure(response.response_code));
    }
    if response.results.is_empty() {
        return Err(FetchError::Empty);
    }

    let mut questions = Vec::with_capacity(response.results.len());
    for raw in response.results {
        questions.push(normalize(raw, rng));
    }
    Ok(questions)
}

fn normalize<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Question {
    let mut answers = raw.incorrect_answers;
    answers.push(raw.correct_answer.clone());
    shuffle(&mut answers, rng);

    Question {
        category: decode_entities(&raw.category),
        text: decode_entities(&raw.question),
        correct_answer: decode_entities(&raw.correct_answer),
        answers: answers.iter().map(|a| decode_entities(a)).collect(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(endpoint: &str, settings: &QuizSettings) -> Result<Vec<Question>, FetchError> {
    let url = build_url(endpoint, settings);
    log::debug!("GET {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("quiz_battle/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let response = client.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text()?;

    parse_response(&body, &mut rand::thread_rng())
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(endpoint: &str, settings: &QuizSettings) -> Result<Vec<Question>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = build_url(endpoint, settings);
    log::debug!("GET {url}");

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window in this context".into()))?;
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| FetchError::Network(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let text_promise = response
        .text()
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|err| FetchError::Network(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| FetchError::Network("response body is not text".into()))?;

    parse_response(&body, &mut rand::thread_rng())
}
