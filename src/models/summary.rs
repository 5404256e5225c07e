//! Externally computed AI engagement summary. The client never derives any
//! of this; it only displays and caches what the summarization service
//! returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyMetrics {
    #[serde(default)]
    pub total_interactions: u32,
    #[serde(default)]
    pub recent_activity: u32,
    #[serde(default)]
    pub communications: u32,
    #[serde(default)]
    pub open_tasks: u32,
    #[serde(default)]
    pub ai_questions_asked: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    pub summary: String,
    pub priority_score: u8,
    pub engagement_level: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub key_metrics: KeyMetrics,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl AiSummary {
    /// Priority clamped to the documented 1-5 scale for display.
    pub fn priority_dots(&self) -> u8 {
        self.priority_score.clamp(1, 5)
    }
}
