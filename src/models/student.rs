use std::fmt;

use serde::{Deserialize, Serialize};

/// High-school grade of a prospective applicant. The server encodes this
/// as a bare number, so (de)serialization goes through `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Eleven,
    Twelve,
}

impl Grade {
    pub const ALL: [Grade; 2] = [Grade::Eleven, Grade::Twelve];

    pub fn as_number(self) -> u8 {
        match self {
            Grade::Eleven => 11,
            Grade::Twelve => 12,
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(Grade::Eleven),
            12 => Ok(Grade::Twelve),
            other => Err(format!("unsupported grade: {}", other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.as_number()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

/// Funnel position of an applicant. The derive order matters: variants are
/// declared earliest-stage first so `Ord` reflects funnel progression
/// (Exploring < Shortlisting < Applying < Submitted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Exploring,
    Shortlisting,
    Applying,
    Submitted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Exploring,
        ApplicationStatus::Shortlisting,
        ApplicationStatus::Applying,
        ApplicationStatus::Submitted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Exploring => "Exploring",
            ApplicationStatus::Shortlisting => "Shortlisting",
            ApplicationStatus::Applying => "Applying",
            ApplicationStatus::Submitted => "Submitted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prospective applicant as returned by the server. The id is opaque and
/// server-assigned; engagement flags default to false when absent on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub application_status: Option<ApplicationStatus>,
    #[serde(default)]
    pub not_contacted_7days: bool,
    #[serde(default)]
    pub high_intent: bool,
    #[serde(default)]
    pub needs_essay_help: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering_follows_funnel() {
        assert!(ApplicationStatus::Exploring < ApplicationStatus::Shortlisting);
        assert!(ApplicationStatus::Shortlisting < ApplicationStatus::Applying);
        assert!(ApplicationStatus::Applying < ApplicationStatus::Submitted);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ApplicationStatus::Shortlisting).unwrap();
        assert_eq!(json, "\"Shortlisting\"");

        let parsed: ApplicationStatus = serde_json::from_str("\"Applying\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::Applying);
    }

    #[test]
    fn test_status_unknown_value_rejected() {
        let result = serde_json::from_str::<ApplicationStatus>("\"Enrolled\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_grade_from_number() {
        assert_eq!(Grade::try_from(11).unwrap(), Grade::Eleven);
        assert_eq!(Grade::try_from(12).unwrap(), Grade::Twelve);
        assert!(Grade::try_from(10).is_err());
    }

    #[test]
    fn test_grade_serde_as_number() {
        let json = serde_json::to_string(&Grade::Twelve).unwrap();
        assert_eq!(json, "12");

        let parsed: Grade = serde_json::from_str("11").unwrap();
        assert_eq!(parsed, Grade::Eleven);
    }

    #[test]
    fn test_student_parses_server_payload() {
        let json = r#"{
            "id": "abc123",
            "name": "Ana Silva",
            "email": "ana@example.com",
            "grade": 12,
            "country": "BR",
            "application_status": "Exploring",
            "high_intent": true
        }"#;

        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, "abc123");
        assert_eq!(student.grade, Some(Grade::Twelve));
        assert_eq!(student.application_status, Some(ApplicationStatus::Exploring));
        assert!(student.high_intent);
        // Absent flags default to false
        assert!(!student.not_contacted_7days);
        assert!(!student.needs_essay_help);
        assert_eq!(student.phone, None);
    }

    #[test]
    fn test_student_minimal_payload() {
        let json = r#"{"id": "x", "name": "Ben"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "Ben");
        assert_eq!(student.email, None);
        assert_eq!(student.grade, None);
    }
}
