use egui::{Align, CentralPanel, Context, RichText, ScrollArea};
use web_time::Instant;
use crate::QuizApp;
use crate::ui::helpers::{answer_option, result_label};
use crate::ui::layout::two_button_row;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let (Some(view), Some(score)) = (app.question_view(), app.score_line()) else {
        return;
    };

    let mut picked: Option<String> = None;
    let mut check = false;
    let mut next = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Quiz Battle");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(score.label());
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            let timer = RichText::new(view.timer_label());
                            // last ten seconds in red
                            if view.time_remaining <= 10 {
                                ui.label(timer.color(egui::Color32::from_rgb(200, 70, 70)));
                            } else {
                                ui.label(timer);
                            }
                        });
                    });
                    ui.label(view.progress_label());
                    ui.add_space(6.0);

                    if let Some(message) = &view.result_message {
                        result_label(ui, message, message == "Correct!");
                        ui.add_space(6.0);
                    }

                    ui.small(&view.category);
                    ScrollArea::vertical()
                        .max_height(150.0)
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            ui.label(RichText::new(&view.text).heading());
                        });
                    ui.add_space(10.0);
                });

                ui.vertical(|ui| {
                    for answer in &view.answers {
                        let selected = view.selected.as_deref() == Some(answer.as_str());
                        if answer_option(ui, answer, selected, !view.revealed) {
                            picked = Some(answer.clone());
                        }
                    }
                });

                ui.add_space(12.0);
                (check, next) = two_button_row(
                    ui,
                    panel_width,
                    ("Check Answer", view.can_check()),
                    ("Next Question", view.can_advance()),
                );
            });
    });

    if let Some(answer) = picked {
        if let Err(err) = app.select_answer(&answer) {
            log::warn!("Answer selection rejected: {err}");
        }
    }
    if check {
        if let Err(err) = app.check_answer() {
            log::warn!("Check rejected: {err}");
        }
    }
    if next {
        if let Err(err) = app.next_question(Instant::now()) {
            log::warn!("Next rejected: {err}");
        }
    }
}
