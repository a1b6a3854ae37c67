
use egui::{Button, CentralPanel, ComboBox, Context, DragValue, Frame, Ui, Visuals};
use crate::model::{Difficulty, MAX_QUESTIONS};
use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("settings_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let mut difficulty = app.settings.difficulty;
            ui.label("Select Difficulty:");
            ComboBox::from_id_salt("difficulty")
                .selected_text(difficulty.label())
                .show_ui(ui, |ui| {
                    for option in Difficulty::ALL {
                        ui.selectable_value(&mut difficulty, option, option.label());
                    }
                });
            if difficulty != app.settings.difficulty {
                app.set_difficulty(difficulty);
            }

            ui.add_space(16.0);

            let mut count = app.count_draft;
            ui.label("Number of Questions:");
            let response = ui.add(DragValue::new(&mut count).range(1..=i64::from(MAX_QUESTIONS)));
            app.edit_question_count(count, response.drag_stopped() || response.lost_focus());
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centered both ways, with a maximum content width and an `inner` block.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Two equally sized buttons in a row, each with its own enabled flag.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(left.0)).clicked()
            })
            .inner;
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(right.0)).clicked()
            })
            .inner;
    });
    (clicked_left, clicked_right)
}
