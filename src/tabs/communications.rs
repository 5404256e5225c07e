//! Communications tab: log outreach touchpoints and trigger the mock
//! email flow. Logged communications are append-only.

use crate::api::types::{EmailRequest, NewCommunication};
use crate::api::{ApiError, ApiRequest, MutationAction};
use crate::models::Channel;

#[derive(Debug)]
pub struct CommunicationsTab {
    student_id: String,
    logged_by: String,
    pub selected: usize,
    pub channel: Channel,
    /// Body of the log form. Cleared on confirmed success only.
    pub body: String,
    pub log_in_flight: bool,
    /// Mock email composer. The server records it as an email
    /// communication; no real mail is sent.
    pub email_open: bool,
    pub email_subject: String,
    pub email_body: String,
    pub email_in_flight: bool,
    pub error: Option<String>,
}

impl CommunicationsTab {
    pub fn new(student_id: impl Into<String>, logged_by: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            logged_by: logged_by.into(),
            selected: 0,
            channel: Channel::Call,
            body: String::new(),
            log_in_flight: false,
            email_open: false,
            email_subject: String::new(),
            email_body: String::new(),
            email_in_flight: false,
            error: None,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn cycle_channel(&mut self) {
        self.channel = self.channel.next();
    }

    /// Submit the log form. Empty body or an in-flight log issues nothing.
    pub fn submit_log(&mut self) -> Option<ApiRequest> {
        let body = self.body.trim();
        if body.is_empty() || self.log_in_flight {
            return None;
        }
        self.log_in_flight = true;
        self.error = None;
        Some(ApiRequest::LogCommunication {
            student_id: self.student_id.clone(),
            comm: NewCommunication {
                channel: self.channel,
                body: body.to_string(),
                logged_by: self.logged_by.clone(),
            },
        })
    }

    pub fn open_email(&mut self) {
        self.email_open = true;
    }

    pub fn close_email(&mut self) {
        if !self.email_in_flight {
            self.email_open = false;
        }
    }

    /// Submit the email composer. Both subject and body are required.
    pub fn submit_email(&mut self) -> Option<ApiRequest> {
        let subject = self.email_subject.trim();
        let body = self.email_body.trim();
        if subject.is_empty() || body.is_empty() || self.email_in_flight {
            return None;
        }
        self.email_in_flight = true;
        self.error = None;
        Some(ApiRequest::TriggerEmail {
            student_id: self.student_id.clone(),
            email: EmailRequest { subject: subject.to_string(), body: body.to_string() },
        })
    }

    pub fn resolve_mutation(&mut self, action: MutationAction, result: &Result<(), ApiError>) {
        match action {
            MutationAction::LogCommunication => {
                self.log_in_flight = false;
                match result {
                    Ok(()) => self.body.clear(),
                    Err(e) => self.error = Some(e.brief()),
                }
            }
            MutationAction::TriggerEmail => {
                self.email_in_flight = false;
                match result {
                    Ok(()) => {
                        self.email_subject.clear();
                        self.email_body.clear();
                        self.email_open = false;
                    }
                    Err(e) => self.error = Some(e.brief()),
                }
            }
            _ => {}
        }
    }
}
