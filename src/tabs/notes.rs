//! Notes tab: add a note, edit or delete existing notes inline.

use crate::api::types::{NewNote, NoteUpdate};
use crate::api::{ApiError, ApiRequest, MutationAction};
use crate::models::Note;
use crate::tabs::ItemState;

/// Draft of a note under edit.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub text: String,
}

#[derive(Debug)]
pub struct NotesTab {
    student_id: String,
    author: String,
    pub selected: usize,
    /// Text of the add-note input. Cleared only after the server confirms
    /// the create, so a failure never loses what was typed.
    pub input: String,
    pub add_in_flight: bool,
    /// Note id under edit plus its lifecycle state. `Viewing` never
    /// appears here; a viewing note simply has no entry.
    pub edit: Option<(String, ItemState<NoteDraft>)>,
    /// Note id awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub delete_in_flight: Option<String>,
    pub error: Option<String>,
}

impl NotesTab {
    pub fn new(student_id: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            author: author.into(),
            selected: 0,
            input: String::new(),
            add_in_flight: false,
            edit: None,
            pending_delete: None,
            delete_in_flight: None,
            error: None,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Submit the add-note form. Empty (or whitespace-only) input and
    /// duplicate submissions while a create is in flight are no-ops.
    pub fn submit_new(&mut self) -> Option<ApiRequest> {
        let text = self.input.trim();
        if text.is_empty() || self.add_in_flight {
            return None;
        }
        self.add_in_flight = true;
        self.error = None;
        Some(ApiRequest::AddNote {
            student_id: self.student_id.clone(),
            note: NewNote { author: self.author.clone(), text: text.to_string() },
        })
    }

    /// Start editing a note. Notes without a server id cannot be edited.
    pub fn start_edit(&mut self, note: &Note) -> bool {
        let Some(id) = note.id.clone() else {
            return false;
        };
        self.edit = Some((id, ItemState::Editing { draft: NoteDraft { text: note.text.clone() } }));
        self.error = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        // A save in flight keeps running; only an editing draft is discarded.
        if let Some((_, state)) = &self.edit {
            if !state.is_saving() {
                self.edit = None;
            }
        }
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut NoteDraft> {
        let (_, state) = self.edit.as_mut()?;
        match state {
            ItemState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    /// Submit the in-progress edit. Empty drafts and already-saving edits
    /// issue nothing.
    pub fn submit_edit(&mut self) -> Option<ApiRequest> {
        let (note_id, state) = self.edit.as_mut()?;
        let text = state.draft()?.text.trim().to_string();
        if text.is_empty() || !state.begin_save() {
            return None;
        }
        self.error = None;
        Some(ApiRequest::UpdateNote {
            student_id: self.student_id.clone(),
            note_id: note_id.clone(),
            update: NoteUpdate { author: None, text: Some(text) },
        })
    }

    /// First delete press: arm the confirmation. Returns false for notes
    /// without an id.
    pub fn request_delete(&mut self, note: &Note) -> bool {
        match &note.id {
            Some(id) => {
                self.pending_delete = Some(id.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second press: issue the delete for the armed note.
    pub fn confirm_delete(&mut self) -> Option<ApiRequest> {
        let note_id = self.pending_delete.take()?;
        if self.delete_in_flight.is_some() {
            return None;
        }
        self.delete_in_flight = Some(note_id.clone());
        self.error = None;
        Some(ApiRequest::DeleteNote { student_id: self.student_id.clone(), note_id })
    }

    /// Route a finished mutation back into the tab's state.
    pub fn resolve_mutation(&mut self, action: MutationAction, result: &Result<(), ApiError>) {
        match action {
            MutationAction::AddNote => {
                self.add_in_flight = false;
                match result {
                    Ok(()) => self.input.clear(),
                    Err(e) => self.error = Some(e.brief()),
                }
            }
            MutationAction::UpdateNote => match result {
                Ok(()) => self.edit = None,
                Err(e) => {
                    self.error = Some(e.brief());
                    if let Some((_, state)) = &mut self.edit {
                        state.save_failed();
                    }
                }
            },
            MutationAction::DeleteNote => {
                self.delete_in_flight = None;
                if let Err(e) = result {
                    self.error = Some(e.brief());
                }
            }
            _ => {}
        }
    }
}
