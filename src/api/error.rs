use thiserror::Error;

/// Failure taxonomy for API calls. Every variant is surfaced inline by the
/// issuing view; nothing is retried automatically and nothing is fatal to
/// the dashboard.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure before a response arrived.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The response arrived but the expected data was absent or
    /// undecodable (missing id, null entity, malformed body).
    #[error("missing data: {0}")]
    MissingData(String),
}

impl ApiError {
    /// Short single-line form for inline status bars.
    pub fn brief(&self) -> String {
        match self {
            ApiError::Transport(_) => "network error".to_string(),
            ApiError::Status { code, .. } => format!("server error ({})", code),
            ApiError::MissingData(_) => "unexpected response".to_string(),
        }
    }
}
