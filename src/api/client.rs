//! Blocking HTTP client for the admin API. One method per endpoint; the
//! caller decides threading (see `dispatch`).

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AckResponse, AiSummaryResponse, EmailRequest, HealthResponse, NewCommunication, NewNote,
    NewTask, NoteUpdate, StudentDetail, StudentPayload, StudentsResponse, TaskUpdate,
};
use crate::models::{AiSummary, Student};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub struct ApiClient {
    http: Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { http: Client::new(), base, token }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(ApiError::Status { code: status.as_u16(), message: body });
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::MissingData(format!("invalid response body: {}", e)))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::decode(self.request(Method::GET, path).send()?)
    }

    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::decode(self.request(method, path).json(body).send()?)
    }

    fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: AckResponse = Self::decode(self.request(Method::DELETE, path).send()?)?;
        Ok(())
    }

    pub fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get("/api/health")
    }

    pub fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response: StudentsResponse = self.get("/api/students")?;
        Ok(response.students)
    }

    pub fn student_detail(&self, student_id: &str) -> Result<StudentDetail, ApiError> {
        if student_id.is_empty() {
            return Err(ApiError::MissingData("missing student id".to_string()));
        }
        self.get(&format!("/api/students/{}", student_id))
    }

    pub fn create_student(&self, payload: &StudentPayload) -> Result<(), ApiError> {
        let _: AckResponse = self.send_json(Method::POST, "/api/students", payload)?;
        Ok(())
    }

    pub fn update_student(
        &self,
        student_id: &str,
        payload: &StudentPayload,
    ) -> Result<(), ApiError> {
        let _: AckResponse =
            self.send_json(Method::PATCH, &format!("/api/students/{}", student_id), payload)?;
        Ok(())
    }

    pub fn add_note(&self, student_id: &str, note: &NewNote) -> Result<(), ApiError> {
        let _: AckResponse =
            self.send_json(Method::POST, &format!("/api/students/{}/notes", student_id), note)?;
        Ok(())
    }

    pub fn update_note(
        &self,
        student_id: &str,
        note_id: &str,
        update: &NoteUpdate,
    ) -> Result<(), ApiError> {
        let _: AckResponse = self.send_json(
            Method::PATCH,
            &format!("/api/students/{}/notes/{}", student_id, note_id),
            update,
        )?;
        Ok(())
    }

    pub fn delete_note(&self, student_id: &str, note_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/students/{}/notes/{}", student_id, note_id))
    }

    pub fn add_task(&self, student_id: &str, task: &NewTask) -> Result<(), ApiError> {
        let _: AckResponse =
            self.send_json(Method::POST, &format!("/api/students/{}/tasks", student_id), task)?;
        Ok(())
    }

    pub fn update_task(
        &self,
        student_id: &str,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<(), ApiError> {
        let _: AckResponse = self.send_json(
            Method::PATCH,
            &format!("/api/students/{}/tasks/{}", student_id, task_id),
            update,
        )?;
        Ok(())
    }

    pub fn delete_task(&self, student_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/students/{}/tasks/{}", student_id, task_id))
    }

    pub fn log_communication(
        &self,
        student_id: &str,
        comm: &NewCommunication,
    ) -> Result<(), ApiError> {
        let _: AckResponse = self.send_json(
            Method::POST,
            &format!("/api/students/{}/communications", student_id),
            comm,
        )?;
        Ok(())
    }

    /// Mock email: the server logs it as a communication and never delivers
    /// real mail.
    pub fn trigger_email(&self, student_id: &str, email: &EmailRequest) -> Result<(), ApiError> {
        let _: AckResponse = self.send_json(
            Method::POST,
            &format!("/api/students/{}/trigger-email", student_id),
            email,
        )?;
        Ok(())
    }

    pub fn ai_summary(&self, student_id: &str) -> Result<AiSummary, ApiError> {
        let response: AiSummaryResponse =
            self.get(&format!("/api/students/{}/ai-summary", student_id))?;
        Ok(response.ai_summary)
    }
}
