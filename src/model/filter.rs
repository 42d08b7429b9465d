//! The board's view filter.

use std::fmt;

use super::MissionStatus;

/// Which missions the board shows.
///
/// Session-scoped view state, never persisted. Seeded to `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Show every mission.
    #[default]
    All,

    /// Show only missions with this status.
    Status(MissionStatus),
}

impl Filter {
    /// Every filter, in the order the filter bar presents them.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Status(MissionStatus::Planned),
        Self::Status(MissionStatus::Active),
        Self::Status(MissionStatus::Completed),
    ];

    /// Whether a mission passes this filter.
    pub fn matches(self, status: MissionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => status == wanted,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Status(status) => fmt::Display::fmt(status, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_status() {
        for status in MissionStatus::ALL {
            assert!(Filter::All.matches(status));
        }
    }

    #[test]
    fn status_filter_matches_only_its_own() {
        let filter = Filter::Status(MissionStatus::Active);
        assert!(filter.matches(MissionStatus::Active));
        assert!(!filter.matches(MissionStatus::Planned));
        assert!(!filter.matches(MissionStatus::Completed));
    }

    #[test]
    fn labels_follow_bar_order() {
        let labels: Vec<String> = Filter::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["All", "Planned", "Active", "Completed"]);
    }
}
