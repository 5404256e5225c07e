use crate::models::{ApplicationStatus, Grade};

/// Single-select toggle restricting the list to students with one
/// engagement flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    NotContacted7Days,
    HighIntent,
    NeedsEssayHelp,
}

impl QuickFilter {
    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::NotContacted7Days => "not contacted 7d",
            QuickFilter::HighIntent => "high intent",
            QuickFilter::NeedsEssayHelp => "needs essay help",
        }
    }
}

/// Criteria for the student list. Each field is independent; `None` (or an
/// empty search string) means the criterion is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub search: String,
    pub status: Option<ApplicationStatus>,
    pub country: Option<String>,
    pub grade: Option<Grade>,
    pub quick: Option<QuickFilter>,
}

impl StudentFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_none()
            && self.country.is_none()
            && self.grade.is_none()
            && self.quick.is_none()
    }

    /// Select a quick filter. Selecting the active one again clears it, so
    /// the control cycles none -> flag -> none.
    pub fn toggle_quick(&mut self, quick: QuickFilter) {
        if self.quick == Some(quick) {
            self.quick = None;
        } else {
            self.quick = Some(quick);
        }
    }

    /// Advance the status criterion through any -> Exploring -> ... ->
    /// Submitted -> any.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(ApplicationStatus::ALL[0]),
            Some(current) => ApplicationStatus::ALL
                .iter()
                .copied()
                .skip_while(|s| *s != current)
                .nth(1),
        };
    }

    /// Advance the grade criterion through any -> 11 -> 12 -> any.
    pub fn cycle_grade(&mut self) {
        self.grade = match self.grade {
            None => Some(Grade::Eleven),
            Some(Grade::Eleven) => Some(Grade::Twelve),
            Some(Grade::Twelve) => None,
        };
    }

    /// Advance the country criterion through the given option list.
    pub fn cycle_country(&mut self, options: &[String]) {
        if options.is_empty() {
            self.country = None;
            return;
        }
        self.country = match &self.country {
            None => Some(options[0].clone()),
            Some(current) => options
                .iter()
                .position(|c| c == current)
                .and_then(|idx| options.get(idx + 1))
                .cloned(),
        };
    }
}
