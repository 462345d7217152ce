//! The round controller and end-of-game reporting.

pub mod controller;
pub mod report;

pub use controller::Game;
pub use report::GameReport;
