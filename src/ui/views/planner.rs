use egui::{ComboBox, Context, ProgressBar, Slider};

use crate::app::EduApp;
use crate::ui::layout::centered_panel;

pub fn ui_planner(app: &mut EduApp, ctx: &Context) {
    let subjects = app.subjects.clone();

    centered_panel(ctx, 380.0, 560.0, |ui| {
        ui.heading("📘 Study Planner");
        ui.add_space(10.0);

        ComboBox::from_label("Choose subject")
            .selected_text(app.plan_subject.clone())
            .show_ui(ui, |ui| {
                for subject in &subjects {
                    ui.selectable_value(&mut app.plan_subject, subject.clone(), subject);
                }
            });

        ui.add(
            Slider::new(&mut app.plan_hours, 1..=12).text("How many hours do you have today?"),
        );

        ui.add_space(10.0);
        if ui.button("Create Plan").clicked() {
            app.make_plan();
        }

        if !app.plan.is_empty() {
            ui.add_space(14.0);
            ui.strong(format!("Your Study Plan for {}:", app.plan_subject));
            ui.add_space(4.0);
            for item in &app.plan {
                ui.label(format!("• {}", item.label));
            }

            // Distribución de horas por bloque
            ui.add_space(10.0);
            ui.label("Study Hours Distribution");
            let max_hours = app
                .plan
                .iter()
                .map(|i| i.hours)
                .fold(f32::EPSILON, f32::max);
            for item in &app.plan {
                ui.add(
                    ProgressBar::new(item.hours / max_hours)
                        .text(format!("{:.1} h", item.hours)),
                );
            }
        }
    });
}
