//! Error types for the activity board client.

use thiserror::Error;

/// Failures talking to the activities API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not complete, no response exists
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived with a non-success status
    #[error("Server responded with status {status} (detail: {detail:?})")]
    Server { status: u16, detail: Option<String> },

    /// The response body is not the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedResponse(e.to_string())
    }
}

/// Required-field violations of the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select an activity")]
    MissingActivity,

    #[error("Please enter an email address")]
    MissingEmail,

    /// The activity is not one of the rendered options
    #[error("Unknown activity '{0}'")]
    UnknownActivity(String),
}

/// Client start-up and session errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API base URL cannot be parsed or cannot carry a path
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The interactive prompt could not be started
    #[error("Readline error: {0}")]
    Readline(String),
}
