use thiserror::Error;

/// Fallback shown when a failed search response carries no `error` field.
pub const GENERIC_SEARCH_ERROR: &str = "Failed to fetch comparables.";

/// Failure taxonomy for calls into the comparables backends.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `message` is the backend's own `error` field when
    /// it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    Url(String),
}

impl ApiError {
    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
