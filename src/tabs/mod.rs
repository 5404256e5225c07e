//! Per-student tab views. Each tab owns its local form state and emits
//! mutation requests scoped to one student id; list data comes from the
//! cached detail payload at render time.

pub mod communications;
pub mod interactions;
pub mod item_state;
pub mod notes;
pub mod tasks;

pub use communications::CommunicationsTab;
pub use interactions::InteractionsTab;
pub use item_state::ItemState;
pub use notes::{NoteDraft, NotesTab};
pub use tasks::{TaskDraft, TasksTab, TEAM_MEMBERS};

/// Which tab is active on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Notes,
    Tasks,
    Communications,
    Interactions,
}

impl TabKind {
    pub const ALL: [TabKind; 4] =
        [TabKind::Notes, TabKind::Tasks, TabKind::Communications, TabKind::Interactions];

    pub fn label(self) -> &'static str {
        match self {
            TabKind::Notes => "Notes",
            TabKind::Tasks => "Tasks",
            TabKind::Communications => "Communications",
            TabKind::Interactions => "Interactions",
        }
    }

    pub fn next(self) -> TabKind {
        match self {
            TabKind::Notes => TabKind::Tasks,
            TabKind::Tasks => TabKind::Communications,
            TabKind::Communications => TabKind::Interactions,
            TabKind::Interactions => TabKind::Notes,
        }
    }

    pub fn prev(self) -> TabKind {
        match self {
            TabKind::Notes => TabKind::Interactions,
            TabKind::Tasks => TabKind::Notes,
            TabKind::Communications => TabKind::Tasks,
            TabKind::Interactions => TabKind::Communications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps_both_ways() {
        let mut tab = TabKind::Notes;
        for _ in 0..TabKind::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, TabKind::Notes);

        for _ in 0..TabKind::ALL.len() {
            tab = tab.prev();
        }
        assert_eq!(tab, TabKind::Notes);
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        for tab in TabKind::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }
}
