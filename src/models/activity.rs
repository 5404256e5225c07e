//! Per-student activity records: internal notes, logged communications, and
//! server-generated interaction events.
//!
//! Subcollection items may arrive without an id (the server does not embed
//! document ids in detail payloads for older records). Items without an id
//! render normally but cannot be edited or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Internal note written by an admin about a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub id: Option<String>,
    pub author: String,
    pub text: String,
    #[serde(default, rename = "ts")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Channel of a logged outreach touchpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Call,
    Email,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Call, Channel::Email, Channel::Sms];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Call => "Call",
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }

    /// Next channel in the selector cycle (call -> email -> sms -> call).
    pub fn next(self) -> Channel {
        match self {
            Channel::Call => Channel::Email,
            Channel::Email => Channel::Sms,
            Channel::Sms => Channel::Call,
        }
    }
}

/// Manually logged outreach record. Append-mostly: the UI only creates
/// these, it never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    #[serde(default)]
    pub id: Option<String>,
    pub channel: Channel,
    pub body: String,
    #[serde(default)]
    pub logged_by: Option<String>,
    #[serde(default, rename = "ts")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Kind of a server-generated interaction event. The server may introduce
/// new kinds at any time, so unknown values map to `Other` instead of
/// failing the whole detail payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Login,
    AiQuestion,
    DocumentSubmitted,
    #[serde(other)]
    Other,
}

impl InteractionKind {
    pub fn label(self) -> &'static str {
        match self {
            InteractionKind::Login => "Login Activity",
            InteractionKind::AiQuestion => "AI Question",
            InteractionKind::DocumentSubmitted => "Document Submitted",
            InteractionKind::Other => "Activity",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            InteractionKind::Login => "●",
            InteractionKind::AiQuestion => "◆",
            InteractionKind::DocumentSubmitted => "▣",
            InteractionKind::Other => "·",
        }
    }
}

/// Read-only interaction event recorded by the platform itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default, rename = "ts")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub details: Option<String>,
}
