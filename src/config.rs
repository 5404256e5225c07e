//! Runtime configuration: CLI flags win over environment variables, which
//! win over defaults.

use crate::api::client::DEFAULT_BASE_URL;

pub const API_URL_ENV: &str = "ADMITDESK_API_URL";
pub const TOKEN_ENV: &str = "ADMITDESK_TOKEN";
pub const OPERATOR_ENV: &str = "ADMITDESK_OPERATOR";

/// Name attributed to notes and communications when none is configured.
pub const DEFAULT_OPERATOR: &str = "Admin";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// Bearer token attached to every request when set.
    pub token: Option<String>,
    /// Operator identity recorded on notes and logged communications.
    pub operator: String,
}

impl Config {
    pub fn resolve(
        api_url: Option<String>,
        token: Option<String>,
        operator: Option<String>,
    ) -> Self {
        Self::resolve_with(api_url, token, operator, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        api_url: Option<String>,
        token: Option<String>,
        operator: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            api_url: api_url
                .or_else(|| env(API_URL_ENV))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: token.or_else(|| env(TOKEN_ENV)),
            operator: operator
                .or_else(|| env(OPERATOR_ENV))
                .unwrap_or_else(|| DEFAULT_OPERATOR.to_string()),
        }
    }
}
