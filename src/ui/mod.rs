pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use web_time::Instant;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();

        if self.needs_fetch() {
            self.request_questions(ctx);
        }
        self.poll_questions(now);
        self.tick(now);

        // Settings always on top; changing them restarts the quiz
        top_panel(self, ctx);

        // Light/dark toggle
        bottom_panel(ctx);

        // Dispatch by phase
        if self.is_loading() {
            views::loading::ui_loading(ctx);
        } else if self.is_ended() {
            views::ended::ui_ended(self, ctx);
        } else {
            views::quiz::ui_quiz(self, ctx);
        }

        // Wake up for the next countdown second even without input
        if let Some(wait) = self
            .session()
            .and_then(|s| s.countdown().until_next_tick(Instant::now()))
        {
            ctx.request_repaint_after(wait);
        }
    }
}
