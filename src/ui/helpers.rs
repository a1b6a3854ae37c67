// src/ui/helpers.rs
use egui::{RadioButton, RichText, Ui};

/// One entry of the answer radio group. Returns true when the user picks it.
pub fn answer_option(ui: &mut Ui, answer: &str, selected: bool, enabled: bool) -> bool {
    ui.add_enabled(enabled, RadioButton::new(selected, answer))
        .clicked()
}

/// Green for "Correct!", red for anything else.
pub fn result_label(ui: &mut Ui, message: &str, correct: bool) {
    let color = if correct {
        egui::Color32::from_rgb(60, 170, 90)
    } else {
        egui::Color32::from_rgb(200, 70, 70)
    };
    ui.label(RichText::new(message).strong().color(color));
}
