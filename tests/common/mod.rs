//! Shared fixtures for integration tests.
#![allow(dead_code)]

use admitdesk::models::{ApplicationStatus, Grade, Student};

pub struct StudentBuilder {
    student: Student,
}

impl StudentBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            student: Student {
                id: id.to_string(),
                name: name.to_string(),
                email: None,
                phone: None,
                grade: None,
                country: None,
                application_status: None,
                not_contacted_7days: false,
                high_intent: false,
                needs_essay_help: false,
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.student.email = Some(email.to_string());
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.student.country = Some(country.to_string());
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.student.grade = Some(grade);
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.student.application_status = Some(status);
        self
    }

    pub fn not_contacted(mut self) -> Self {
        self.student.not_contacted_7days = true;
        self
    }

    pub fn high_intent(mut self) -> Self {
        self.student.high_intent = true;
        self
    }

    pub fn needs_essay_help(mut self) -> Self {
        self.student.needs_essay_help = true;
        self
    }

    pub fn build(self) -> Student {
        self.student
    }
}
