pub mod doubt;
pub mod home;
pub mod motivation;
pub mod planner;
pub mod progress;
pub mod quiz;
