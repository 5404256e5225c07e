//! Create/edit student form state. The same form backs both screens; the
//! edit variant is seeded from the cached record.

use crate::api::types::StudentPayload;
use crate::models::{ApplicationStatus, Grade, Student};

/// Fields in display order. Text fields take typed input; the others
/// cycle through their options on space or enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Grade,
    Country,
    Status,
    NotContacted,
    HighIntent,
    NeedsEssayHelp,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Grade,
        FormField::Country,
        FormField::Status,
        FormField::NotContacted,
        FormField::HighIntent,
        FormField::NeedsEssayHelp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Grade => "Grade",
            FormField::Country => "Country",
            FormField::Status => "Application status",
            FormField::NotContacted => "Not contacted in 7 days",
            FormField::HighIntent => "High intent",
            FormField::NeedsEssayHelp => "Needs essay help",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Email | FormField::Phone | FormField::Country
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub grade: Option<Grade>,
    pub status: Option<ApplicationStatus>,
    pub not_contacted_7days: bool,
    pub high_intent: bool,
    pub needs_essay_help: bool,
    pub focus: usize,
    pub in_flight: bool,
    pub error: Option<String>,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone().unwrap_or_default(),
            phone: student.phone.clone().unwrap_or_default(),
            country: student.country.clone().unwrap_or_default(),
            grade: student.grade,
            status: student.application_status,
            not_contacted_7days: student.not_contacted_7days,
            high_intent: student.high_intent,
            needs_essay_help: student.needs_essay_help,
            ..Default::default()
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus % FormField::ALL.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Type into the focused field. Non-text fields treat space as their
    /// toggle/cycle key and ignore other characters.
    pub fn input(&mut self, c: char) {
        match self.focused() {
            FormField::Name => self.name.push(c),
            FormField::Email => self.email.push(c),
            FormField::Phone => self.phone.push(c),
            FormField::Country => self.country.push(c),
            field if c == ' ' => self.cycle(field),
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.focused() {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Email => {
                self.email.pop();
            }
            FormField::Phone => {
                self.phone.pop();
            }
            FormField::Country => {
                self.country.pop();
            }
            _ => {}
        }
    }

    fn cycle(&mut self, field: FormField) {
        match field {
            FormField::Grade => {
                self.grade = match self.grade {
                    None => Some(Grade::Eleven),
                    Some(Grade::Eleven) => Some(Grade::Twelve),
                    Some(Grade::Twelve) => None,
                };
            }
            FormField::Status => {
                self.status = match self.status {
                    None => Some(ApplicationStatus::ALL[0]),
                    Some(current) => ApplicationStatus::ALL
                        .iter()
                        .copied()
                        .skip_while(|s| *s != current)
                        .nth(1),
                };
            }
            FormField::NotContacted => self.not_contacted_7days = !self.not_contacted_7days,
            FormField::HighIntent => self.high_intent = !self.high_intent,
            FormField::NeedsEssayHelp => self.needs_essay_help = !self.needs_essay_help,
            _ => {}
        }
    }

    /// Build the submit payload. Name and email are required; `None` means
    /// the form is not ready and nothing should be sent.
    pub fn payload(&self) -> Option<StudentPayload> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        let opt = |s: &str| {
            let t = s.trim();
            if t.is_empty() { None } else { Some(t.to_string()) }
        };
        Some(StudentPayload {
            name: name.to_string(),
            email: email.to_string(),
            phone: opt(&self.phone),
            grade: self.grade,
            country: opt(&self.country),
            application_status: self.status,
            not_contacted_7days: self.not_contacted_7days,
            high_intent: self.high_intent,
            needs_essay_help: self.needs_essay_help,
        })
    }

    /// Display value for a field, used by rendering.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Country => self.country.clone(),
            FormField::Grade => {
                self.grade.map(|g| g.as_number().to_string()).unwrap_or_else(|| "-".to_string())
            }
            FormField::Status => {
                self.status.map(|s| s.label().to_string()).unwrap_or_else(|| "-".to_string())
            }
            FormField::NotContacted => checkbox(self.not_contacted_7days),
            FormField::HighIntent => checkbox(self.high_intent),
            FormField::NeedsEssayHelp => checkbox(self.needs_essay_help),
        }
    }
}

fn checkbox(on: bool) -> String {
    if on { "[x]".to_string() } else { "[ ]".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requires_name_and_email() {
        let mut form = StudentForm::new();
        assert!(form.payload().is_none());

        form.name = "Ana Souza".to_string();
        assert!(form.payload().is_none());

        form.email = "ana@example.com".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.name, "Ana Souza");
        assert_eq!(payload.phone, None);
    }

    #[test]
    fn test_text_input_goes_to_focused_field() {
        let mut form = StudentForm::new();
        form.input('A');
        form.input('n');
        form.input('a');
        assert_eq!(form.name, "Ana");

        form.focus_next();
        form.input('a');
        form.input('@');
        assert_eq!(form.email, "a@");

        form.delete_char();
        assert_eq!(form.email, "a");
    }

    #[test]
    fn test_space_cycles_grade() {
        let mut form = StudentForm::new();
        form.focus = 3;
        assert_eq!(form.focused(), FormField::Grade);

        form.input(' ');
        assert_eq!(form.grade, Some(Grade::Eleven));
        form.input(' ');
        assert_eq!(form.grade, Some(Grade::Twelve));
        form.input(' ');
        assert_eq!(form.grade, None);
    }

    #[test]
    fn test_space_toggles_flags() {
        let mut form = StudentForm::new();
        form.focus = 7;
        assert_eq!(form.focused(), FormField::HighIntent);

        form.input(' ');
        assert!(form.high_intent);
        form.input(' ');
        assert!(!form.high_intent);
    }

    #[test]
    fn test_status_cycle_ends_at_none() {
        let mut form = StudentForm::new();
        form.focus = 5;
        for _ in 0..ApplicationStatus::ALL.len() {
            form.input(' ');
        }
        assert_eq!(form.status, Some(ApplicationStatus::Submitted));
        form.input(' ');
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = StudentForm::new();
        form.focus_prev();
        assert_eq!(form.focused(), FormField::NeedsEssayHelp);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn test_from_student_round_trip() {
        let student: Student = serde_json::from_str(
            r#"{"id":"s1","name":"Ana","email":"ana@example.com","grade":12,
                "country":"BR","application_status":"Applying","high_intent":true}"#,
        )
        .unwrap();

        let form = StudentForm::from_student(&student);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.grade, Some(Grade::Twelve));
        assert!(form.high_intent);

        let payload = form.payload().unwrap();
        assert_eq!(payload.application_status, Some(ApplicationStatus::Applying));
    }
}
