//! Screen rendering and input handling.

mod board;

pub use board::{BoardScreen, next_filter, select_filter};
