pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::EduApp;
use crate::model::AppState;
use layout::{bottom_panel, top_panel};

impl App for EduApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por pantalla
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::AskDoubt => views::doubt::ui_doubt(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Planner => views::planner::ui_planner(self, ctx),
            AppState::Progress => views::progress::ui_progress(self, ctx),
            AppState::Motivation => views::motivation::ui_motivation(self, ctx),
        }
    }
}
