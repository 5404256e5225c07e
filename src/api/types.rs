//! Wire payloads for the admin API. Response shapes follow the server's
//! JSON exactly; request payloads omit `None` fields so a PATCH only
//! touches what the form actually set.

use serde::{Deserialize, Serialize};

use crate::models::{
    AiSummary, ApplicationStatus, Channel, Communication, Grade, Interaction, Note, Student, Task,
    TaskPriority, TaskStatus,
};

#[derive(Debug, Clone, Deserialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
}

/// Aggregate detail payload: the student plus all sub-resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    pub student: Student,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default)]
    pub communications: Vec<Communication>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiSummaryResponse {
    pub ai_summary: AiSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// Body for creating or fully updating a student. The create and edit
/// forms both submit the complete record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<ApplicationStatus>,
    pub not_contacted_7days: bool,
    pub high_intent: bool,
    pub needs_essay_help: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskUpdate {
    /// Patch that only flips the status to completed.
    pub fn complete() -> Self {
        Self { status: Some(TaskStatus::Completed), ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCommunication {
    pub channel: Channel,
    pub body: String,
    pub logged_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub subject: String,
    pub body: String,
}
