use egui::{Context, RichText, TextEdit};

use crate::app::EduApp;
use crate::ui::layout::centered_panel;

pub fn ui_doubt(app: &mut EduApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 620.0, |ui| {
        ui.heading("❓ Ask Any Doubt (Maths / English / Science)");
        ui.add_space(10.0);

        ui.add(
            TextEdit::singleline(&mut app.doubt_input)
                .hint_text("Enter your question (example: What is square root of 144?)")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        if ui.button("Submit Doubt").clicked() {
            app.submit_doubt();
        }

        ui.add_space(12.0);
        if let Some(ans) = &app.doubt_answer {
            ui.label(RichText::new(ans).strong());
        }
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
