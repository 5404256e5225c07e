pub mod client;
pub mod dispatch;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use dispatch::{ApiEvent, ApiOutcome, ApiRequest, Dispatcher, MutationAction, RequestId};
pub use error::ApiError;
