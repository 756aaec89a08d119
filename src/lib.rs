pub mod app;
pub mod data;
pub mod doubt;
pub mod model;
pub mod planner;
pub mod storage;
pub mod ui;

pub use app::EduApp;
