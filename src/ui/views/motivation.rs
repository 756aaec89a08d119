use egui::{Align, Context, RichText};

use crate::app::EduApp;
use crate::ui::layout::centered_panel;

pub fn ui_motivation(app: &mut EduApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 520.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🌟 Motivation");
            ui.add_space(16.0);

            if let Some(quote) = app.quote {
                ui.label(RichText::new(format!("“{quote}”")).italics().heading());
            }

            ui.add_space(16.0);
            if ui.button("🔄 Another one").clicked() {
                app.new_quote();
            }
        });
    });
}
