use egui::{Align, ComboBox, Context, TextEdit};

use crate::app::EduApp;
use crate::model::LevelFilter;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_quiz(app: &mut EduApp, ctx: &Context) {
    if app.current_user.is_none() {
        ui_quiz_login(app, ctx);
    } else if app.session.is_none() {
        ui_quiz_setup(app, ctx);
    } else {
        ui_quiz_question(app, ctx);
    }
}

/// Login y alta, solo exigidos para la sección de quiz.
fn ui_quiz_login(app: &mut EduApp, ctx: &Context) {
    centered_panel(ctx, 360.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🔐 Login to Continue Quiz");
        });
        ui.add_space(14.0);

        ui.strong("Login");
        ui.add(TextEdit::singleline(&mut app.login_username).hint_text("Username"));
        ui.add(
            TextEdit::singleline(&mut app.login_password)
                .hint_text("Password")
                .password(true),
        );
        if ui.button("Login").clicked() {
            app.login();
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.strong("Sign Up");
        ui.add(TextEdit::singleline(&mut app.signup_username).hint_text("Create username"));
        ui.add(
            TextEdit::singleline(&mut app.signup_password)
                .hint_text("Create password")
                .password(true),
        );
        if ui.button("Sign Up").clicked() {
            app.signup();
        }

        ui.add_space(10.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}

/// Selección de asignatura y nivel antes de arrancar la sesión.
fn ui_quiz_setup(app: &mut EduApp, ctx: &Context) {
    let subjects = app.subjects.clone();

    centered_panel(ctx, 280.0, 480.0, |ui| {
        ui.heading("📝 Quiz Section");
        ui.add_space(10.0);

        ComboBox::from_label("Choose subject")
            .selected_text(app.quiz_subject.clone())
            .show_ui(ui, |ui| {
                for subject in &subjects {
                    ui.selectable_value(&mut app.quiz_subject, subject.clone(), subject);
                }
            });

        ComboBox::from_label("Difficulty (optional)")
            .selected_text(app.quiz_level.label())
            .show_ui(ui, |ui| {
                for level in LevelFilter::ALL {
                    ui.selectable_value(&mut app.quiz_level, level, level.label());
                }
            });

        ui.add_space(12.0);
        if ui.button("▶ Start New Quiz").clicked() {
            app.start_quiz();
        }

        ui.add_space(10.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}

/// Pregunta actual con sus opciones y la navegación anterior/siguiente.
fn ui_quiz_question(app: &mut EduApp, ctx: &Context) {
    // Las acciones se recogen primero y se aplican después, para no
    // mutar el app mientras la sesión está prestada.
    let mut chosen: Option<String> = None;
    let mut go_prev = false;
    let mut go_next = false;
    let mut do_submit = false;

    centered_panel(ctx, 420.0, 620.0, |ui| {
        let Some(session) = &app.session else { return };
        let panel_width = ui.available_width();
        let q = &session.questions[session.current];

        ui.strong(format!("Q {}. {}", session.current + 1, q.question));
        ui.add_space(8.0);

        let current_choice = session.answers[session.current].as_deref();
        for option in &q.options {
            if ui.radio(current_choice == Some(option.as_str()), option).clicked() {
                chosen = Some(option.clone());
            }
        }

        ui.add_space(8.0);
        let answered = session.answers.iter().filter(|a| a.is_some()).count();
        ui.label(format!(
            "Question {} of {} — {answered} answered",
            session.current + 1,
            session.questions.len()
        ));

        ui.add_space(8.0);
        let (prev, next) = two_button_row(ui, panel_width, "⬅ Previous", "Next ➡");
        go_prev = prev;
        go_next = next;

        ui.add_space(6.0);
        do_submit = ui.button("✅ Submit Quiz").clicked();
    });

    if let Some(choice) = chosen {
        app.select_answer(choice);
    }
    if go_prev {
        app.prev_question();
    }
    if go_next {
        app.next_question();
    }
    if do_submit {
        app.submit_quiz();
    }
}
