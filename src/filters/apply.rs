use super::criteria::{QuickFilter, StudentFilter};
use crate::models::Student;

/// Apply filter criteria to the full student list, returning the visible
/// subset.
///
/// Active criteria are ANDed together; with no active criteria this is the
/// identity function. Pure: no side effects, no network access, re-run only
/// when inputs change.
pub fn apply_filter(students: &[Student], filter: &StudentFilter) -> Vec<Student> {
    if filter.is_empty() {
        return students.to_vec();
    }

    students.iter().filter(|s| matches_filter(s, filter)).cloned().collect()
}

fn matches_filter(student: &Student, filter: &StudentFilter) -> bool {
    matches_search(student, filter.search.trim())
        && filter.status.is_none_or(|status| student.application_status == Some(status))
        && filter.country.as_deref().is_none_or(|country| student.country.as_deref() == Some(country))
        && filter.grade.is_none_or(|grade| student.grade == Some(grade))
        && filter.quick.is_none_or(|quick| matches_quick(student, quick))
}

/// Case-insensitive substring match against name OR email.
fn matches_search(student: &Student, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    if student.name.to_lowercase().contains(&needle) {
        return true;
    }
    student
        .email
        .as_deref()
        .is_some_and(|email| email.to_lowercase().contains(&needle))
}

fn matches_quick(student: &Student, quick: QuickFilter) -> bool {
    match quick {
        QuickFilter::NotContacted7Days => student.not_contacted_7days,
        QuickFilter::HighIntent => student.high_intent,
        QuickFilter::NeedsEssayHelp => student.needs_essay_help,
    }
}
