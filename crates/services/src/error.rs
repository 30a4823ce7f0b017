//! Shared error types for the services crate.

use thiserror::Error;

/// Failure talking to the trivia content provider.
///
/// Transport failures, non-success HTTP statuses and provider-level rejections
/// all land here. Callers log these and keep their previous state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetworkError {
    #[error("trivia request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("trivia request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("trivia provider rejected the request (response code {code})")]
    Rejected { code: u8 },
    #[error("trivia response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted while building provider configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid trivia API url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("trivia API url must use http or https: {0}")]
    UnsupportedScheme(String),
}
