//! Mission types: the unit of display in Flightdeck.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One mission on the board.
///
/// Only `status` ever changes after seeding; `id`, `name`, and `crew`
/// are fixed for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub name: String,
    pub status: MissionStatus,

    /// Crew member names, in display order.
    pub crew: Vec<String>,
}

impl Mission {
    /// The crew roster as it is displayed: names comma-joined in order.
    pub fn crew_line(&self) -> String {
        self.crew.join(", ")
    }
}

/// Where a mission stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Not yet underway.
    Planned,

    /// Work is in progress.
    Active,

    /// Wrapped up.
    Completed,
}

impl MissionStatus {
    /// Every status, in display order. Fixes the order of the
    /// status picker and the filter bar.
    pub const ALL: [Self; 3] = [Self::Planned, Self::Active, Self::Completed];
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A status string didn't name any known status.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown status `{0}` (expected planned, active, or completed)")]
pub struct ParseStatusError(String);

impl FromStr for MissionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planned" => Ok(Self::Planned),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
