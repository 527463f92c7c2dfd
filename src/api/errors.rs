use thiserror::Error;

/// Failures reported by the auth9-core REST client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Non-success status carrying the backend's own message.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Connection, timeout or TLS failure; no backend message available.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a body the portal could not decode.
    #[error("Decode error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Message suitable for showing to the administrator, if the backend sent one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound(message) | ApiError::Status { message, .. } => Some(message),
            ApiError::Unauthorized | ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
