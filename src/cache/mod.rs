//! Read cache keyed by (entity kind, id) with staleness windows and
//! mutation invalidation.
//!
//! Reads render whatever is cached (stale data is better than a blank
//! screen) while `needs_fetch` decides whether a refetch should be issued.
//! A successful mutation against a student's sub-resources invalidates that
//! student's detail entry and the aggregate list entry, nothing else; a
//! failed mutation leaves the cache untouched.
//!
//! A failed read is recorded per key and suppresses further fetches for
//! that key: retries happen only on explicit refresh, on navigation back
//! into the view, or once the failure ages past the key's window. Nothing
//! is retried automatically.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::api::types::StudentDetail;
use crate::models::{AiSummary, Student};

/// Freshness window for the student list and per-student detail.
pub const DETAIL_TTL: Duration = Duration::from_secs(60);
/// Freshness window for AI summaries.
pub const SUMMARY_TTL: Duration = Duration::from_secs(300);

/// Identity of one cached read: entity kind plus id where applicable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Students,
    Student(String),
    Summary(String),
}

impl CacheKey {
    fn ttl(&self) -> Duration {
        match self {
            CacheKey::Students | CacheKey::Student(_) => DETAIL_TTL,
            CacheKey::Summary(_) => SUMMARY_TTL,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self { value, fetched_at: Instant::now() }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

#[derive(Debug, Clone)]
struct FetchFailure {
    message: String,
    at: Instant,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    students: Option<CacheEntry<Vec<Student>>>,
    details: HashMap<String, CacheEntry<StudentDetail>>,
    summaries: HashMap<String, CacheEntry<AiSummary>>,
    inflight: HashSet<CacheKey>,
    failures: HashMap<CacheKey, FetchFailure>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached student list, fresh or stale.
    pub fn students(&self) -> Option<&[Student]> {
        self.students.as_ref().map(|e| e.value.as_slice())
    }

    /// Cached detail for one student, fresh or stale.
    pub fn detail(&self, student_id: &str) -> Option<&StudentDetail> {
        self.details.get(student_id).map(|e| &e.value)
    }

    /// Cached AI summary for one student, fresh or stale.
    pub fn summary(&self, student_id: &str) -> Option<&AiSummary> {
        self.summaries.get(student_id).map(|e| &e.value)
    }

    fn is_fresh(&self, key: &CacheKey) -> bool {
        let ttl = key.ttl();
        match key {
            CacheKey::Students => self.students.as_ref().is_some_and(|e| e.is_fresh(ttl)),
            CacheKey::Student(id) => self.details.get(id).is_some_and(|e| e.is_fresh(ttl)),
            CacheKey::Summary(id) => self.summaries.get(id).is_some_and(|e| e.is_fresh(ttl)),
        }
    }

    /// A fetch should be issued when the entry is missing or past its
    /// freshness window, no request for the same key is in flight, and the
    /// last attempt did not fail within the key's window.
    pub fn needs_fetch(&self, key: &CacheKey) -> bool {
        !self.is_fresh(key) && !self.inflight.contains(key) && !self.failure_blocks_fetch(key)
    }

    fn failure_blocks_fetch(&self, key: &CacheKey) -> bool {
        self.failures.get(key).is_some_and(|f| f.at.elapsed() < key.ttl())
    }

    /// Message of the last failed fetch for this key, until it is cleared
    /// by a successful fetch, an invalidation, or `clear_failure`.
    pub fn fetch_error(&self, key: &CacheKey) -> Option<&str> {
        self.failures.get(key).map(|f| f.message.as_str())
    }

    pub fn record_failure(&mut self, key: CacheKey, message: String) {
        self.failures.insert(key, FetchFailure { message, at: Instant::now() });
    }

    pub fn clear_failure(&mut self, key: &CacheKey) {
        self.failures.remove(key);
    }

    pub fn is_inflight(&self, key: &CacheKey) -> bool {
        self.inflight.contains(key)
    }

    pub fn mark_inflight(&mut self, key: CacheKey) {
        self.inflight.insert(key);
    }

    pub fn clear_inflight(&mut self, key: &CacheKey) {
        self.inflight.remove(key);
    }

    pub fn put_students(&mut self, students: Vec<Student>) {
        self.students = Some(CacheEntry::new(students));
        self.failures.remove(&CacheKey::Students);
    }

    pub fn put_detail(&mut self, student_id: String, detail: StudentDetail) {
        self.failures.remove(&CacheKey::Student(student_id.clone()));
        self.details.insert(student_id, CacheEntry::new(detail));
    }

    pub fn put_summary(&mut self, student_id: String, summary: AiSummary) {
        self.failures.remove(&CacheKey::Summary(student_id.clone()));
        self.summaries.insert(student_id, CacheEntry::new(summary));
    }

    /// Drop the aggregate list entry so the next access refetches it.
    /// Clears any recorded failure, so an explicit refresh retries.
    pub fn invalidate_list(&mut self) {
        self.students = None;
        self.failures.remove(&CacheKey::Students);
    }

    /// Invalidate after a successful sub-resource mutation: the mutated
    /// student's detail entry plus the aggregate list. Other students'
    /// entries are untouched.
    pub fn invalidate_student(&mut self, student_id: &str) {
        self.details.remove(student_id);
        self.failures.remove(&CacheKey::Student(student_id.to_string()));
        self.invalidate_list();
    }

    /// Force the next summary access to refetch (manual refresh).
    pub fn invalidate_summary(&mut self, student_id: &str) {
        self.summaries.remove(student_id);
        self.failures.remove(&CacheKey::Summary(student_id.to_string()));
    }

    #[cfg(test)]
    fn backdate_failure(&mut self, key: &CacheKey, age: Duration) {
        if let Some(f) = self.failures.get_mut(key) {
            f.at = Instant::now() - age;
        }
    }

    #[cfg(test)]
    fn backdate(&mut self, key: &CacheKey, age: Duration) {
        let fetched_at = Instant::now() - age;
        match key {
            CacheKey::Students => {
                if let Some(e) = self.students.as_mut() {
                    e.fetched_at = fetched_at;
                }
            }
            CacheKey::Student(id) => {
                if let Some(e) = self.details.get_mut(id) {
                    e.fetched_at = fetched_at;
                }
            }
            CacheKey::Summary(id) => {
                if let Some(e) = self.summaries.get_mut(id) {
                    e.fetched_at = fetched_at;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;

    fn student(id: &str) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {}", id),
            email: None,
            phone: None,
            grade: None,
            country: None,
            application_status: None,
            not_contacted_7days: false,
            high_intent: false,
            needs_essay_help: false,
        }
    }

    fn detail(id: &str) -> StudentDetail {
        StudentDetail {
            student: student(id),
            notes: vec![],
            interactions: vec![],
            communications: vec![],
            tasks: vec![],
        }
    }

    #[test]
    fn test_empty_cache_needs_fetch() {
        let cache = QueryCache::new();
        assert!(cache.needs_fetch(&CacheKey::Students));
        assert!(cache.needs_fetch(&CacheKey::Student("a".to_string())));
        assert!(cache.needs_fetch(&CacheKey::Summary("a".to_string())));
        assert!(cache.students().is_none());
    }

    #[test]
    fn test_fresh_entry_does_not_need_fetch() {
        let mut cache = QueryCache::new();
        cache.put_students(vec![student("a")]);
        assert!(!cache.needs_fetch(&CacheKey::Students));
        assert_eq!(cache.students().unwrap().len(), 1);
    }

    #[test]
    fn test_stale_entry_needs_fetch_but_still_renders() {
        let mut cache = QueryCache::new();
        cache.put_students(vec![student("a")]);
        cache.backdate(&CacheKey::Students, DETAIL_TTL + Duration::from_secs(1));

        assert!(cache.needs_fetch(&CacheKey::Students));
        // Stale data stays available for rendering
        assert!(cache.students().is_some());
    }

    #[test]
    fn test_summary_uses_longer_window() {
        let mut cache = QueryCache::new();
        cache.put_summary("a".to_string(), sample_summary());

        // Past the detail window but within the summary window
        cache.backdate(
            &CacheKey::Summary("a".to_string()),
            DETAIL_TTL + Duration::from_secs(1),
        );
        assert!(!cache.needs_fetch(&CacheKey::Summary("a".to_string())));

        cache.backdate(
            &CacheKey::Summary("a".to_string()),
            SUMMARY_TTL + Duration::from_secs(1),
        );
        assert!(cache.needs_fetch(&CacheKey::Summary("a".to_string())));
    }

    #[test]
    fn test_inflight_suppresses_fetch() {
        let mut cache = QueryCache::new();
        cache.mark_inflight(CacheKey::Students);
        assert!(!cache.needs_fetch(&CacheKey::Students));

        cache.clear_inflight(&CacheKey::Students);
        assert!(cache.needs_fetch(&CacheKey::Students));
    }

    #[test]
    fn test_invalidate_student_scoped_to_one_id() {
        let mut cache = QueryCache::new();
        cache.put_students(vec![student("a"), student("b")]);
        cache.put_detail("a".to_string(), detail("a"));
        cache.put_detail("b".to_string(), detail("b"));

        cache.invalidate_student("a");

        // A's detail and the list are gone; B's detail is untouched
        assert!(cache.detail("a").is_none());
        assert!(cache.students().is_none());
        assert!(cache.detail("b").is_some());
        assert!(!cache.needs_fetch(&CacheKey::Student("b".to_string())));
    }

    #[test]
    fn test_invalidate_student_keeps_summary() {
        let mut cache = QueryCache::new();
        cache.put_summary("a".to_string(), sample_summary());
        cache.invalidate_student("a");
        assert!(cache.summary("a").is_some());
    }

    #[test]
    fn test_invalidate_summary() {
        let mut cache = QueryCache::new();
        cache.put_summary("a".to_string(), sample_summary());
        cache.invalidate_summary("a");
        assert!(cache.summary("a").is_none());
        assert!(cache.needs_fetch(&CacheKey::Summary("a".to_string())));
    }

    #[test]
    fn test_recorded_failure_suppresses_refetch() {
        let mut cache = QueryCache::new();
        cache.record_failure(CacheKey::Students, "network error".to_string());

        assert!(!cache.needs_fetch(&CacheKey::Students));
        assert_eq!(cache.fetch_error(&CacheKey::Students), Some("network error"));
    }

    #[test]
    fn test_invalidate_clears_failure_and_reenables_fetch() {
        let mut cache = QueryCache::new();
        cache.record_failure(CacheKey::Students, "network error".to_string());
        cache.record_failure(
            CacheKey::Summary("a".to_string()),
            "server error (503)".to_string(),
        );

        cache.invalidate_list();
        assert!(cache.fetch_error(&CacheKey::Students).is_none());
        assert!(cache.needs_fetch(&CacheKey::Students));

        cache.invalidate_summary("a");
        assert!(cache.fetch_error(&CacheKey::Summary("a".to_string())).is_none());
        assert!(cache.needs_fetch(&CacheKey::Summary("a".to_string())));
    }

    #[test]
    fn test_successful_fetch_clears_failure() {
        let mut cache = QueryCache::new();
        cache.record_failure(CacheKey::Students, "network error".to_string());
        cache.put_students(vec![student("a")]);
        assert!(cache.fetch_error(&CacheKey::Students).is_none());
    }

    #[test]
    fn test_failure_ages_out_with_staleness_window() {
        let mut cache = QueryCache::new();
        cache.record_failure(CacheKey::Students, "network error".to_string());
        cache.backdate_failure(&CacheKey::Students, DETAIL_TTL + Duration::from_secs(1));

        // Past the window the key is fetchable again; the message stays
        // visible until something replaces it.
        assert!(cache.needs_fetch(&CacheKey::Students));
        assert!(cache.fetch_error(&CacheKey::Students).is_some());
    }

    #[test]
    fn test_last_write_wins() {
        let mut cache = QueryCache::new();
        cache.put_students(vec![student("a")]);
        cache.put_students(vec![student("a"), student("b")]);
        assert_eq!(cache.students().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_refetch_shrinks_list_by_one() {
        // Deleting a note: mutation succeeds, detail invalidated, refetch
        // returns the list without exactly that note.
        let mut cache = QueryCache::new();
        let mut d = detail("a");
        d.notes = vec![
            crate::models::Note {
                id: Some("n1".to_string()),
                author: "Admin".to_string(),
                text: "first".to_string(),
                timestamp: None,
            },
            crate::models::Note {
                id: Some("n2".to_string()),
                author: "Admin".to_string(),
                text: "second".to_string(),
                timestamp: None,
            },
        ];
        cache.put_detail("a".to_string(), d.clone());
        let before = cache.detail("a").unwrap().notes.len();

        cache.invalidate_student("a");
        d.notes.retain(|n| n.id.as_deref() != Some("n1"));
        cache.put_detail("a".to_string(), d);

        let notes = &cache.detail("a").unwrap().notes;
        assert_eq!(notes.len(), before - 1);
        assert!(notes.iter().all(|n| n.id.as_deref() != Some("n1")));
        assert!(notes.iter().any(|n| n.id.as_deref() == Some("n2")));
    }

    fn sample_summary() -> AiSummary {
        serde_json::from_str(
            r#"{"summary":"s","priority_score":3,"engagement_level":"Medium"}"#,
        )
        .unwrap()
    }
}
