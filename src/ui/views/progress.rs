use egui::{Context, Grid, ScrollArea};

use crate::app::EduApp;
use crate::ui::layout::centered_panel;

pub fn ui_progress(app: &mut EduApp, ctx: &Context) {
    let history = app.user_history();
    let averages = app.average_by_subject();
    let logged_in = app.current_user.is_some();

    centered_panel(ctx, 420.0, 640.0, |ui| {
        ui.heading("📈 Progress & Score History");
        ui.add_space(10.0);

        if !logged_in {
            ui.label("Login to the Quiz first to see your personal progress.");
            return;
        }
        if history.is_empty() {
            ui.label("No quiz attempts saved yet.");
            return;
        }

        ui.strong("Your quiz attempts");
        ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
            Grid::new("score_history")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    ui.strong("Subject");
                    ui.strong("Level");
                    ui.strong("Score");
                    ui.strong("Total");
                    ui.strong("Time");
                    ui.end_row();

                    for record in &history {
                        ui.label(&record.subject);
                        ui.label(&record.level);
                        ui.label(record.score.to_string());
                        ui.label(record.total.to_string());
                        ui.label(&record.timestamp);
                        ui.end_row();
                    }
                });
        });

        ui.add_space(14.0);
        ui.strong("Average score by subject");
        Grid::new("subject_averages").striped(true).show(ui, |ui| {
            for (subject, avg) in &averages {
                ui.label(subject);
                ui.label(format!("{avg:.2}"));
                ui.end_row();
            }
        });
    });
}
