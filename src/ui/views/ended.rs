use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_ended(app: &mut QuizApp, ctx: &Context) {
    let Some(score) = app.score_line() else {
        return;
    };

    let mut play_again = false;
    centered_panel(ctx, 220.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("End of Quiz");
            ui.add_space(16.0);
            ui.label(RichText::new(score.final_label()).size(20.0));
            ui.add_space(24.0);
            play_again = ui
                .add_sized([160.0, 36.0], Button::new("Play again"))
                .clicked();
        });
    });

    if play_again {
        app.play_again();
    }
}
