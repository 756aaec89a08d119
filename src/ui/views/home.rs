use egui::{Align, Context, RichText};

use crate::app::EduApp;
use crate::ui::layout::centered_panel;

pub fn ui_home(app: &mut EduApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("📚 Education Learning Agent");
            ui.label(
                RichText::new("Practice quizzes, ask doubts and plan your study — simple and offline.")
                    .weak(),
            );
            ui.add_space(14.0);
        });

        ui.label("• Solve quick doubts (Math / Science / English).");
        ui.label("• Take randomized quizzes (login required for quizzes).");
        ui.label("• Create a study plan and view progress.");
        ui.add_space(18.0);

        // Contadores en vivo desde los stores
        ui.columns(2, |cols| {
            cols[0].vertical_centered(|ui| {
                ui.label(RichText::new(app.quizzes_taken().to_string()).heading());
                ui.label("Quizzes taken");
            });
            cols[1].vertical_centered(|ui| {
                ui.label(RichText::new(app.doubts_asked().to_string()).heading());
                ui.label("Doubts asked");
            });
        });
    });
}
