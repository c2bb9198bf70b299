//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::RequestError;

/// Errors emitted by the remote trivia API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("response body did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("trivia API returned code {code}: {}", api_code_message(*code))]
    Api { code: u8 },
}

/// Meaning of the API-level `response_code` values, per the remote service's
/// documented convention (0 is success and never reaches this table).
fn api_code_message(code: u8) -> &'static str {
    match code {
        1 => "no results for the requested parameters",
        2 => "invalid request parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown response code",
    }
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
