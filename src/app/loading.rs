use std::sync::mpsc::{self, Sender};

use web_time::Instant;

use super::*;
use crate::trivia::fetch_questions;

/// A dispatched request: its id and where the worker sends the outcome.
pub struct FetchTicket {
    pub id: u64,
    pub tx: Sender<FetchOutcome>,
}

impl QuizApp {
    pub fn needs_fetch(&self) -> bool {
        matches!(self.phase, Phase::Loading { request: None })
    }

    /// Marks a new request as the only one whose result will be accepted.
    /// The receiver for any earlier request is dropped here.
    pub fn begin_request(&mut self) -> FetchTicket {
        self.next_request_id += 1;
        let id = self.next_request_id;
        let (tx, rx) = mpsc::channel();

        self.fetch_rx = Some(rx);
        self.phase = Phase::Loading { request: Some(id) };
        FetchTicket { id, tx }
    }

    /// Fires off a fetch for the current settings and asks for a repaint when it lands.
    pub fn request_questions(&mut self, ctx: &egui::Context) {
        let ticket = self.begin_request();
        let endpoint = self.config.endpoint.clone();
        let settings = self.settings;
        let ctx = ctx.clone();

        log::info!(
            "Requesting {} {} questions (request {})",
            settings.count(),
            settings.difficulty,
            ticket.id
        );

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = fetch_questions(&endpoint, &settings);
            let _ = ticket.tx.send((ticket.id, result));
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_questions(&endpoint, &settings).await;
            let _ = ticket.tx.send((ticket.id, result));
            ctx.request_repaint();
        });
    }

    pub fn poll_questions(&mut self, now: Instant) {
        let outcome = self.fetch_rx.as_ref().and_then(|rx| rx.try_recv().ok());

        if let Some((id, result)) = outcome {
            self.fetch_rx = None;
            self.on_questions_loaded(id, result, now);
        }
    }

    /// Data loaded. Only the outstanding request may start a session; on error the
    /// controller stays in `Loading` until the settings change.
    pub fn on_questions_loaded(
        &mut self,
        id: u64,
        result: Result<Vec<Question>, FetchError>,
        now: Instant,
    ) -> bool {
        if !matches!(self.phase, Phase::Loading { request: Some(pending) } if pending == id) {
            log::debug!("Dropping result of superseded request {id}");
            return false;
        }

        match result {
            Ok(questions) => {
                log::info!("Loaded {} questions (request {id})", questions.len());
                let session = QuizSession::new(questions, self.config.question_seconds(), now);
                self.phase = Phase::Running(session);
                true
            }
            Err(err) => {
                log::error!("Error fetching questions: {err}");
                false
            }
        }
    }
}
