/// Edit lifecycle of a single list item, modeled as an explicit tagged
/// union instead of scattered boolean flags.
///
/// Transitions: `Viewing -> Editing` (start), `Editing -> Saving`
/// (submit), `Saving -> Viewing` (success), `Saving -> Editing` (failure,
/// draft preserved), `Editing -> Viewing` (cancel).
#[derive(Debug, Clone, PartialEq)]
pub enum ItemState<D> {
    Viewing,
    Editing { draft: D },
    Saving { draft: D },
}

impl<D> ItemState<D> {
    pub fn is_viewing(&self) -> bool {
        matches!(self, ItemState::Viewing)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, ItemState::Saving { .. })
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            ItemState::Viewing => None,
            ItemState::Editing { draft } | ItemState::Saving { draft } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            ItemState::Viewing => None,
            ItemState::Editing { draft } | ItemState::Saving { draft } => Some(draft),
        }
    }

    /// Submit: only an `Editing` item moves to `Saving`. Returns false for
    /// `Viewing` (nothing to save) and `Saving` (duplicate submission).
    pub fn begin_save(&mut self) -> bool {
        match std::mem::replace(self, ItemState::Viewing) {
            ItemState::Editing { draft } => {
                *self = ItemState::Saving { draft };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Failure: return to `Editing` with the draft intact so user input is
    /// not lost.
    pub fn save_failed(&mut self) {
        if let ItemState::Saving { draft } = std::mem::replace(self, ItemState::Viewing) {
            *self = ItemState::Editing { draft };
        }
    }

    /// Success: drop the draft and return to `Viewing`.
    pub fn save_succeeded(&mut self) {
        *self = ItemState::Viewing;
    }
}
