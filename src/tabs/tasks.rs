//! Tasks tab: create follow-up tasks, edit them inline, mark them
//! complete with a single key, delete with confirmation.

use crate::api::types::{NewTask, TaskUpdate};
use crate::api::{ApiError, ApiRequest, MutationAction};
use crate::models::{Task, TaskPriority, TaskStatus};
use crate::tabs::ItemState;

/// Assignee choices offered by the task form. "Everyone" maps to no
/// assignee on the wire.
pub const TEAM_MEMBERS: [&str; 5] = [
    "dev@example.com",
    "admin@example.com",
    "advisor1@example.com",
    "advisor2@example.com",
    "Everyone",
];

fn assignee_at(index: usize) -> Option<String> {
    let name = TEAM_MEMBERS.get(index).copied()?;
    if name == "Everyone" {
        None
    } else {
        Some(name.to_string())
    }
}

/// Form fields shared by the create form and inline edits.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub due_at: String,
    pub notes: String,
    pub assignee_index: usize,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            due_at: String::new(),
            notes: String::new(),
            // Default to "Everyone" (unassigned).
            assignee_index: TEAM_MEMBERS.len() - 1,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        }
    }
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        let assignee_index = task
            .assigned_to
            .as_deref()
            .and_then(|who| TEAM_MEMBERS.iter().position(|m| *m == who))
            .unwrap_or(TEAM_MEMBERS.len() - 1);
        Self {
            title: task.title.clone(),
            due_at: task.due_at.clone().unwrap_or_default(),
            notes: task.notes.clone().unwrap_or_default(),
            assignee_index,
            priority: task.priority,
            status: task.status,
        }
    }

    pub fn assignee_label(&self) -> &'static str {
        TEAM_MEMBERS.get(self.assignee_index).copied().unwrap_or("Everyone")
    }

    pub fn cycle_assignee(&mut self) {
        self.assignee_index = (self.assignee_index + 1) % TEAM_MEMBERS.len();
    }

    pub fn cycle_priority(&mut self) {
        let pos = TaskPriority::ALL.iter().position(|p| *p == self.priority).unwrap_or(0);
        self.priority = TaskPriority::ALL[(pos + 1) % TaskPriority::ALL.len()];
    }

    pub fn cycle_status(&mut self) {
        let pos = TaskStatus::ALL.iter().position(|s| *s == self.status).unwrap_or(0);
        self.status = TaskStatus::ALL[(pos + 1) % TaskStatus::ALL.len()];
    }

    fn opt(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[derive(Debug)]
pub struct TasksTab {
    student_id: String,
    pub selected: usize,
    /// Create form. Reset to defaults only after the server confirms.
    pub form: TaskDraft,
    pub create_in_flight: bool,
    pub edit: Option<(String, ItemState<TaskDraft>)>,
    /// Task id whose mark-complete patch is in flight.
    pub complete_in_flight: Option<String>,
    pub pending_delete: Option<String>,
    pub delete_in_flight: Option<String>,
    pub error: Option<String>,
}

impl TasksTab {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            selected: 0,
            form: TaskDraft::default(),
            create_in_flight: false,
            edit: None,
            complete_in_flight: None,
            pending_delete: None,
            delete_in_flight: None,
            error: None,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Submit the create form. A task needs a title; everything else is
    /// optional. Empty titles and in-flight creates issue nothing.
    pub fn submit_new(&mut self) -> Option<ApiRequest> {
        let title = self.form.title.trim();
        if title.is_empty() || self.create_in_flight {
            return None;
        }
        self.create_in_flight = true;
        self.error = None;
        Some(ApiRequest::AddTask {
            student_id: self.student_id.clone(),
            task: NewTask {
                title: title.to_string(),
                due_at: TaskDraft::opt(&self.form.due_at),
                notes: TaskDraft::opt(&self.form.notes),
                assigned_to: assignee_at(self.form.assignee_index),
                priority: self.form.priority,
            },
        })
    }

    pub fn start_edit(&mut self, task: &Task) -> bool {
        let Some(id) = task.id.clone() else {
            return false;
        };
        self.edit = Some((id, ItemState::Editing { draft: TaskDraft::from_task(task) }));
        self.error = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        if let Some((_, state)) = &self.edit {
            if !state.is_saving() {
                self.edit = None;
            }
        }
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut TaskDraft> {
        let (_, state) = self.edit.as_mut()?;
        match state {
            ItemState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn submit_edit(&mut self) -> Option<ApiRequest> {
        let (task_id, state) = self.edit.as_mut()?;
        let draft = state.draft()?.clone();
        if draft.title.trim().is_empty() || !state.begin_save() {
            return None;
        }
        self.error = None;
        Some(ApiRequest::UpdateTask {
            student_id: self.student_id.clone(),
            task_id: task_id.clone(),
            update: TaskUpdate {
                title: Some(draft.title.trim().to_string()),
                due_at: TaskDraft::opt(&draft.due_at),
                notes: TaskDraft::opt(&draft.notes),
                assigned_to: assignee_at(draft.assignee_index),
                status: Some(draft.status),
                priority: Some(draft.priority),
            },
        })
    }

    /// One-key shortcut: patch only the status to completed. Already
    /// completed tasks and tasks without ids issue nothing.
    pub fn mark_complete(&mut self, task: &Task) -> Option<ApiRequest> {
        let task_id = task.id.clone()?;
        if task.is_completed() || self.complete_in_flight.is_some() {
            return None;
        }
        self.complete_in_flight = Some(task_id.clone());
        self.error = None;
        Some(ApiRequest::UpdateTask {
            student_id: self.student_id.clone(),
            task_id,
            update: TaskUpdate::complete(),
        })
    }

    pub fn request_delete(&mut self, task: &Task) -> bool {
        match &task.id {
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

    pub fn confirm_delete(&mut self) -> Option<ApiRequest> {
        let task_id = self.pending_delete.take()?;
        if self.delete_in_flight.is_some() {
            return None;
        }
        self.delete_in_flight = Some(task_id.clone());
        self.error = None;
        Some(ApiRequest::DeleteTask { student_id: self.student_id.clone(), task_id })
    }

    pub fn resolve_mutation(&mut self, action: MutationAction, result: &Result<(), ApiError>) {
        match action {
            MutationAction::AddTask => {
                self.create_in_flight = false;
                match result {
                    Ok(()) => self.form = TaskDraft::default(),
                    Err(e) => self.error = Some(e.brief()),
                }
            }
            // UpdateTask covers both inline edits and mark-complete; the
            // in-flight markers say which one finished.
            MutationAction::UpdateTask => {
                if self.complete_in_flight.take().is_some() {
                    if let Err(e) = result {
                        self.error = Some(e.brief());
                    }
                } else {
                    match result {
                        Ok(()) => self.edit = None,
                        Err(e) => {
                            self.error = Some(e.brief());
                            if let Some((_, state)) = &mut self.edit {
                                state.save_failed();
                            }
                        }
                    }
                }
            }
            MutationAction::DeleteTask => {
                self.delete_in_flight = None;
                if let Err(e) = result {
                    self.error = Some(e.brief());
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: Option<&str>, title: &str, status: TaskStatus) -> Task {
        Task {
            id: id.map(String::from),
            title: title.to_string(),
            due_at: None,
            notes: None,
            assigned_to: Some("advisor1@example.com".to_string()),
            created_by: None,
            created_at: None,
            status,
            priority: TaskPriority::Medium,
        }
    }

    fn server_error() -> Result<(), ApiError> {
        Err(ApiError::Status { code: 503, message: "unavailable".to_string() })
    }

    #[test]
    fn test_empty_title_is_noop() {
        let mut tab = TasksTab::new("s1");
        tab.form.notes = "details without a title".to_string();
        assert!(tab.submit_new().is_none());
        assert!(!tab.create_in_flight);
    }

    #[test]
    fn test_submit_builds_payload_from_form() {
        let mut tab = TasksTab::new("s1");
        tab.form.title = "  Call about essay  ".to_string();
        tab.form.due_at = "2025-06-01".to_string();
        tab.form.assignee_index = 2;
        tab.form.priority = TaskPriority::High;

        let request = tab.submit_new().unwrap();
        match request {
            ApiRequest::AddTask { student_id, task } => {
                assert_eq!(student_id, "s1");
                assert_eq!(task.title, "Call about essay");
                assert_eq!(task.due_at.as_deref(), Some("2025-06-01"));
                assert_eq!(task.assigned_to.as_deref(), Some("advisor1@example.com"));
                assert_eq!(task.priority, TaskPriority::High);
            }
            other => panic!("unexpected request: {:?}", other),
        }
        assert!(tab.submit_new().is_none());
    }

    #[test]
    fn test_everyone_maps_to_unassigned() {
        let mut tab = TasksTab::new("s1");
        tab.form.title = "Reach out".to_string();
        tab.form.assignee_index = TEAM_MEMBERS.len() - 1;

        match tab.submit_new().unwrap() {
            ApiRequest::AddTask { task, .. } => assert_eq!(task.assigned_to, None),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_failed_create_preserves_form() {
        let mut tab = TasksTab::new("s1");
        tab.form.title = "Important follow-up".to_string();
        tab.form.notes = "Context typed by hand".to_string();
        tab.submit_new().unwrap();

        tab.resolve_mutation(MutationAction::AddTask, &server_error());
        assert_eq!(tab.form.title, "Important follow-up");
        assert_eq!(tab.form.notes, "Context typed by hand");
        assert!(tab.error.is_some());
    }

    #[test]
    fn test_successful_create_resets_form() {
        let mut tab = TasksTab::new("s1");
        tab.form.title = "Done soon".to_string();
        tab.submit_new().unwrap();
        tab.resolve_mutation(MutationAction::AddTask, &Ok(()));
        assert_eq!(tab.form, TaskDraft::default());
    }

    #[test]
    fn test_mark_complete_is_minimal_patch() {
        let mut tab = TasksTab::new("s1");
        let request = tab.mark_complete(&task(Some("t1"), "Call", TaskStatus::Open)).unwrap();
        match request {
            ApiRequest::UpdateTask { task_id, update, .. } => {
                assert_eq!(task_id, "t1");
                assert_eq!(update, TaskUpdate::complete());
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_mark_complete_noop_when_already_done() {
        let mut tab = TasksTab::new("s1");
        assert!(tab.mark_complete(&task(Some("t1"), "Call", TaskStatus::Completed)).is_none());
        assert!(tab.mark_complete(&task(None, "Call", TaskStatus::Open)).is_none());
    }

    #[test]
    fn test_complete_and_edit_outcomes_do_not_cross() {
        let mut tab = TasksTab::new("s1");
        tab.start_edit(&task(Some("t1"), "Call", TaskStatus::Open));
        tab.mark_complete(&task(Some("t2"), "Email", TaskStatus::Open)).unwrap();

        // The completed patch fails; the untouched edit draft stays editing.
        tab.resolve_mutation(MutationAction::UpdateTask, &server_error());
        assert!(tab.complete_in_flight.is_none());
        let (_, state) = tab.edit.as_ref().unwrap();
        assert!(!state.is_saving());
        assert!(state.draft().is_some());
    }

    #[test]
    fn test_edit_failure_keeps_draft() {
        let mut tab = TasksTab::new("s1");
        tab.start_edit(&task(Some("t1"), "Call", TaskStatus::Open));
        tab.edit_draft_mut().unwrap().title = "Call again".to_string();
        tab.submit_edit().unwrap();

        tab.resolve_mutation(MutationAction::UpdateTask, &server_error());
        let (_, state) = tab.edit.as_ref().unwrap();
        assert_eq!(state.draft().unwrap().title, "Call again");
    }

    #[test]
    fn test_delete_flow() {
        let mut tab = TasksTab::new("s1");
        assert!(tab.request_delete(&task(Some("t1"), "Call", TaskStatus::Open)));
        let request = tab.confirm_delete().unwrap();
        assert!(matches!(request, ApiRequest::DeleteTask { .. }));
        tab.resolve_mutation(MutationAction::DeleteTask, &Ok(()));
        assert!(tab.delete_in_flight.is_none());
    }

    #[test]
    fn test_draft_cycles_wrap() {
        let mut draft = TaskDraft::default();
        for _ in 0..TEAM_MEMBERS.len() {
            draft.cycle_assignee();
        }
        assert_eq!(draft.assignee_index, TEAM_MEMBERS.len() - 1);

        let start = draft.priority;
        for _ in 0..TaskPriority::ALL.len() {
            draft.cycle_priority();
        }
        assert_eq!(draft.priority, start);
    }

    #[test]
    fn test_draft_from_task_unknown_assignee() {
        let mut source = task(Some("t1"), "Call", TaskStatus::Open);
        source.assigned_to = Some("someone@else.example".to_string());
        let draft = TaskDraft::from_task(&source);
        assert_eq!(draft.assignee_label(), "Everyone");
    }
}
