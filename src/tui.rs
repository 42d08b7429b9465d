//! Terminal UI for the mission board.

mod app;
mod screens;

pub use app::run;
