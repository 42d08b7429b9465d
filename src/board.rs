//! The mission board: the one owner of mutable state.
//!
//! Everything the UI shows derives from here, and every mutation routes
//! through the two operations below. The visible list is recomputed on
//! every call, never cached.

use crate::model::{Filter, Mission, MissionStatus};

/// The mission collection and the active view filter.
#[derive(Debug)]
pub struct Board {
    missions: Vec<Mission>,
    filter: Filter,
}

impl Board {
    /// A board seeded with the fixed mission roster, showing everything.
    pub fn new() -> Self {
        Self {
            missions: seed_missions(),
            filter: Filter::All,
        }
    }

    /// The active filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Replaces the active filter wholesale. Re-selecting the current
    /// filter is a no-op replacement, not an error.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Sets the status of the mission with this id.
    ///
    /// All other fields and entries are untouched; order is preserved.
    /// An unmatched id is silently ignored — the roster is closed today,
    /// but the guard keeps a future mutable roster safe.
    pub fn update_status(&mut self, id: u32, new_status: MissionStatus) {
        if let Some(mission) = self.missions.iter_mut().find(|m| m.id == id) {
            mission.status = new_status;
        }
    }

    /// The missions the active filter lets through, in roster order.
    pub fn visible(&self) -> Vec<&Mission> {
        self.missions
            .iter()
            .filter(|m| self.filter.matches(m.status))
            .collect()
    }

    /// The full roster, in seed order, regardless of the filter.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed mission roster. Seeded once; entries are never added or removed.
pub fn seed_missions() -> Vec<Mission> {
    let seed: [(u32, &str, MissionStatus, [&str; 2]); 10] = [
        (1, "Mars Rover", MissionStatus::Planned, ["Alice", "Bob"]),
        (2, "Moon Base", MissionStatus::Active, ["Charlie", "Dave"]),
        (3, "Venus Observatory", MissionStatus::Planned, ["Eve", "Frank"]),
        (4, "Jupiter Moons Survey", MissionStatus::Completed, ["Grace", "Hank"]),
        (5, "Asteroid Belt Mining", MissionStatus::Active, ["Ivy", "John"]),
        (6, "Saturn Ring Research", MissionStatus::Planned, ["Karen", "Leo"]),
        (7, "Deep Space Probe", MissionStatus::Completed, ["Mia", "Nolan"]),
        (8, "Interstellar Observatory", MissionStatus::Planned, ["Olivia", "Pete"]),
        (9, "Neptune Atmospheric Study", MissionStatus::Active, ["Quinn", "Rachel"]),
        (10, "Pluto Reclamation", MissionStatus::Planned, ["Sam", "Tina"]),
    ];

    seed.into_iter()
        .map(|(id, name, status, crew)| Mission {
            id,
            name: name.to_string(),
            status,
            crew: crew.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let missions = seed_missions();
        for (i, a) in missions.iter().enumerate() {
            for b in &missions[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate id {}", a.id);
            }
        }
    }

    #[test]
    fn seed_has_ten_missions() {
        assert_eq!(seed_missions().len(), 10);
    }

    #[test]
    fn all_filter_shows_full_roster_in_order() {
        let board = Board::new();
        let visible = board.visible();

        assert_eq!(visible.len(), 10);
        let ids: Vec<u32> = visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn status_filter_shows_exact_subset_in_roster_order() {
        let mut board = Board::new();

        for status in MissionStatus::ALL {
            board.set_filter(Filter::Status(status));
            let expected: Vec<u32> = board
                .missions()
                .iter()
                .filter(|m| m.status == status)
                .map(|m| m.id)
                .collect();
            let visible: Vec<u32> = board.visible().iter().map(|m| m.id).collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn update_status_changes_only_the_matching_entry() {
        let mut board = Board::new();
        let before = board.missions().to_vec();

        board.update_status(1, MissionStatus::Active);

        let after = board.missions();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].status, MissionStatus::Active);
        assert_eq!(after[0].name, "Mars Rover");
        for (old, new) in before.iter().zip(after).skip(1) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.status, new.status);
        }
    }

    #[test]
    fn update_status_with_unknown_id_is_a_no_op() {
        let mut board = Board::new();
        let before: Vec<(u32, MissionStatus)> =
            board.missions().iter().map(|m| (m.id, m.status)).collect();

        board.update_status(99, MissionStatus::Completed);

        let after: Vec<(u32, MissionStatus)> =
            board.missions().iter().map(|m| (m.id, m.status)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn completed_filter_shows_jupiter_then_deep_space() {
        let mut board = Board::new();
        board.set_filter(Filter::Status(MissionStatus::Completed));

        let names: Vec<&str> = board.visible().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Jupiter Moons Survey", "Deep Space Probe"]);
    }

    #[test]
    fn completing_moon_base_removes_it_from_the_active_view() {
        let mut board = Board::new();
        board.set_filter(Filter::Status(MissionStatus::Active));
        board.update_status(2, MissionStatus::Completed);

        let names: Vec<&str> = board.visible().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Asteroid Belt Mining", "Neptune Atmospheric Study"]);
    }

    #[test]
    fn draining_a_status_leaves_an_empty_view() {
        let mut board = Board::new();

        // Move both completed missions away.
        board.update_status(4, MissionStatus::Active);
        board.update_status(7, MissionStatus::Planned);
        board.set_filter(Filter::Status(MissionStatus::Completed));

        assert!(board.visible().is_empty());
    }

    #[test]
    fn reselecting_the_active_filter_changes_nothing() {
        let mut board = Board::new();
        board.set_filter(Filter::Status(MissionStatus::Planned));
        let before: Vec<u32> = board.visible().iter().map(|m| m.id).collect();

        board.set_filter(Filter::Status(MissionStatus::Planned));

        let after: Vec<u32> = board.visible().iter().map(|m| m.id).collect();
        assert_eq!(before, after);
    }
}
