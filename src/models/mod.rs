pub mod activity;
pub mod student;
pub mod summary;
pub mod task;

pub use activity::{Channel, Communication, Interaction, InteractionKind, Note};
pub use student::{ApplicationStatus, Grade, Student};
pub use summary::{AiSummary, KeyMetrics};
pub use task::{Task, TaskPriority, TaskStatus};
