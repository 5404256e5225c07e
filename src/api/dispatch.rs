//! Background execution of API calls.
//!
//! The UI event loop never blocks on the network: each request runs on a
//! short-lived thread and reports back over an mpsc channel drained once
//! per tick. Request ids let the app drop responses that a later request
//! for the same cache key has superseded, so the last issued fetch wins.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use uuid::Uuid;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{
    EmailRequest, NewCommunication, NewNote, NewTask, NoteUpdate, StudentDetail, StudentPayload,
    TaskUpdate,
};
use crate::cache::CacheKey;
use crate::models::{AiSummary, Student};

pub type RequestId = Uuid;

/// One API call, ready to run on a worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchStudents,
    FetchDetail(String),
    FetchSummary(String),
    CreateStudent(StudentPayload),
    UpdateStudent { student_id: String, payload: StudentPayload },
    AddNote { student_id: String, note: NewNote },
    UpdateNote { student_id: String, note_id: String, update: NoteUpdate },
    DeleteNote { student_id: String, note_id: String },
    AddTask { student_id: String, task: NewTask },
    UpdateTask { student_id: String, task_id: String, update: TaskUpdate },
    DeleteTask { student_id: String, task_id: String },
    LogCommunication { student_id: String, comm: NewCommunication },
    TriggerEmail { student_id: String, email: EmailRequest },
}

impl ApiRequest {
    /// Cache key this request reads into, for fetches only.
    pub fn cache_key(&self) -> Option<CacheKey> {
        match self {
            ApiRequest::FetchStudents => Some(CacheKey::Students),
            ApiRequest::FetchDetail(id) => Some(CacheKey::Student(id.clone())),
            ApiRequest::FetchSummary(id) => Some(CacheKey::Summary(id.clone())),
            _ => None,
        }
    }
}

/// Which mutation finished, so the issuing view can re-enable exactly the
/// control that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    CreateStudent,
    UpdateStudent,
    AddNote,
    UpdateNote,
    DeleteNote,
    AddTask,
    UpdateTask,
    DeleteTask,
    LogCommunication,
    TriggerEmail,
}

#[derive(Debug)]
pub enum ApiOutcome {
    Students(Result<Vec<Student>, ApiError>),
    Detail { student_id: String, result: Result<StudentDetail, ApiError> },
    Summary { student_id: String, result: Result<AiSummary, ApiError> },
    Mutation { student_id: Option<String>, action: MutationAction, result: Result<(), ApiError> },
}

#[derive(Debug)]
pub struct ApiEvent {
    pub request_id: RequestId,
    pub outcome: ApiOutcome,
}

/// Hands requests to worker threads and funnels their outcomes back to the
/// event loop.
pub struct Dispatcher {
    client: Arc<ApiClient>,
    tx: Sender<ApiEvent>,
}

impl Dispatcher {
    pub fn new(client: ApiClient) -> (Self, Receiver<ApiEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { client: Arc::new(client), tx }, rx)
    }

    pub fn dispatch(&self, request: ApiRequest) -> RequestId {
        let request_id = Uuid::new_v4();
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = execute(&client, request);
            // Receiver gone means the app is shutting down; nothing to do.
            let _ = tx.send(ApiEvent { request_id, outcome });
        });
        request_id
    }
}

fn execute(client: &ApiClient, request: ApiRequest) -> ApiOutcome {
    match request {
        ApiRequest::FetchStudents => ApiOutcome::Students(client.list_students()),
        ApiRequest::FetchDetail(student_id) => {
            let result = client.student_detail(&student_id);
            ApiOutcome::Detail { student_id, result }
        }
        ApiRequest::FetchSummary(student_id) => {
            let result = client.ai_summary(&student_id);
            ApiOutcome::Summary { student_id, result }
        }
        ApiRequest::CreateStudent(payload) => ApiOutcome::Mutation {
            student_id: None,
            action: MutationAction::CreateStudent,
            result: client.create_student(&payload),
        },
        ApiRequest::UpdateStudent { student_id, payload } => {
            let result = client.update_student(&student_id, &payload);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::UpdateStudent,
                result,
            }
        }
        ApiRequest::AddNote { student_id, note } => {
            let result = client.add_note(&student_id, &note);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::AddNote,
                result,
            }
        }
        ApiRequest::UpdateNote { student_id, note_id, update } => {
            let result = client.update_note(&student_id, &note_id, &update);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::UpdateNote,
                result,
            }
        }
        ApiRequest::DeleteNote { student_id, note_id } => {
            let result = client.delete_note(&student_id, &note_id);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::DeleteNote,
                result,
            }
        }
        ApiRequest::AddTask { student_id, task } => {
            let result = client.add_task(&student_id, &task);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::AddTask,
                result,
            }
        }
        ApiRequest::UpdateTask { student_id, task_id, update } => {
            let result = client.update_task(&student_id, &task_id, &update);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::UpdateTask,
                result,
            }
        }
        ApiRequest::DeleteTask { student_id, task_id } => {
            let result = client.delete_task(&student_id, &task_id);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::DeleteTask,
                result,
            }
        }
        ApiRequest::LogCommunication { student_id, comm } => {
            let result = client.log_communication(&student_id, &comm);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::LogCommunication,
                result,
            }
        }
        ApiRequest::TriggerEmail { student_id, email } => {
            let result = client.trigger_email(&student_id, &email);
            ApiOutcome::Mutation {
                student_id: Some(student_id),
                action: MutationAction::TriggerEmail,
                result,
            }
        }
    }
}
