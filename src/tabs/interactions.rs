//! Interactions tab: read-only timeline of platform-generated events,
//! newest first. No mutations originate here.

use chrono::{DateTime, Utc};

use crate::models::Interaction;

#[derive(Debug)]
pub struct InteractionsTab {
    student_id: String,
    pub selected: usize,
}

impl InteractionsTab {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self { student_id: student_id.into(), selected: 0 }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Display order: newest first, events without a timestamp last in
    /// their original order.
    pub fn sorted<'a>(&self, interactions: &'a [Interaction]) -> Vec<&'a Interaction> {
        let mut ordered: Vec<&Interaction> = interactions.iter().collect();
        ordered.sort_by_key(|i| std::cmp::Reverse(i.timestamp.unwrap_or(DateTime::<Utc>::MIN_UTC)));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionKind;

    fn event(kind: InteractionKind, ts: Option<&str>) -> Interaction {
        Interaction {
            kind,
            timestamp: ts.map(|s| s.parse().unwrap()),
            details: None,
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let tab = InteractionsTab::new("s1");
        let events = vec![
            event(InteractionKind::Login, Some("2025-03-01T10:00:00Z")),
            event(InteractionKind::AiQuestion, Some("2025-03-02T10:00:00Z")),
            event(InteractionKind::DocumentSubmitted, None),
        ];

        let ordered = tab.sorted(&events);
        assert_eq!(ordered[0].kind, InteractionKind::AiQuestion);
        assert_eq!(ordered[1].kind, InteractionKind::Login);
        assert_eq!(ordered[2].kind, InteractionKind::DocumentSubmitted);
    }

    #[test]
    fn test_sorted_empty() {
        let tab = InteractionsTab::new("s1");
        assert!(tab.sorted(&[]).is_empty());
    }
}
