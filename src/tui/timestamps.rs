use chrono::{DateTime, Datelike, Utc};

/// Tiered timestamp display: relative within the last week ("2h ago",
/// "3d ago"), otherwise an absolute date that drops the year when it is
/// the current one.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let elapsed = now.signed_duration_since(*timestamp);

    match elapsed.num_seconds() {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3600),
        s if s < 7 * 86_400 => format!("{}d ago", s / 86_400),
        _ if timestamp.year() == now.year() => timestamp.format("%b %-d").to_string(),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}

/// Missing timestamps render as a placeholder instead of being hidden.
pub fn format_optional(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => format_timestamp(ts),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_just_now() {
        let ts = Utc::now() - Duration::seconds(20);
        assert_eq!(format_timestamp(&ts), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        let ts = Utc::now() - Duration::minutes(12);
        assert_eq!(format_timestamp(&ts), "12m ago");
    }

    #[test]
    fn test_hours_ago() {
        let ts = Utc::now() - Duration::hours(7);
        assert_eq!(format_timestamp(&ts), "7h ago");
    }

    #[test]
    fn test_days_ago() {
        let ts = Utc::now() - Duration::days(6);
        assert_eq!(format_timestamp(&ts), "6d ago");
    }

    #[test]
    fn test_absolute_same_year_omits_year() {
        let now = Utc::now();
        let ts = now - Duration::days(30);
        let formatted = format_timestamp(&ts);
        if ts.year() == now.year() {
            assert!(!formatted.contains(&now.year().to_string()));
        }
        assert!(formatted.contains(&ts.format("%b").to_string()));
    }

    #[test]
    fn test_absolute_older_year_includes_year() {
        let ts = Utc::now() - Duration::days(400);
        assert!(format_timestamp(&ts).contains(&ts.year().to_string()));
    }

    #[test]
    fn test_optional_placeholder() {
        assert_eq!(format_optional(None), "unknown");
    }
}
