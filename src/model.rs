//! Core data model for Flightdeck: missions, statuses, and the view filter.

mod filter;
mod mission;

pub use filter::Filter;
pub use mission::{Mission, MissionStatus, ParseStatusError};
