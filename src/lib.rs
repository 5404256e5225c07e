//! AdmitDesk - terminal dashboard for tracking prospective university
//! applicants.
//!
//! A thin client over a JSON/HTTP admin API. It supports:
//!
//! - Browsing, searching, and filtering the student list
//! - Per-student detail with notes, tasks, communications, and interactions
//! - An on-demand AI engagement summary panel
//! - Creating and editing student records
//!
//! All reads go through a [`cache::QueryCache`] with staleness windows;
//! network calls run on background threads so the UI never blocks.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod filters;
pub mod models;
pub mod tabs;
pub mod tui;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use cache::QueryCache;
pub use filters::{StudentFilter, apply_filter};
pub use models::{AiSummary, ApplicationStatus, Student};
