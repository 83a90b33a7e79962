use serde_json::Value;
use thiserror::Error;

pub const GENERIC_NETWORK_MESSAGE: &str = "Network error";
pub const FAILED_LOAD_MESSAGE: &str = "Failed to load properties";

/// Failure of a call to the listings API.
///
/// Every variant carries (or implies) a message that is safe to show the user;
/// the underlying cause, if any, only goes to the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The backend answered with a non-2xx status, or with a non-success envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never got an answer (connect, TLS, timeout, ...).
    #[error("Network error")]
    Transport(String),

    /// 2xx, but not something we can read.
    #[error("Unexpected response from server")]
    Decode(String),

    #[error("Property not found")]
    NotFound,
}

impl FetchError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            FetchError::NotFound => Some(404),
            FetchError::Transport(_) | FetchError::Decode(_) => None,
        }
    }

    /// Underlying cause, for logs only.
    pub fn cause(&self) -> Option<&str> {
        match self {
            FetchError::Transport(cause) | FetchError::Decode(cause) => Some(cause),
            FetchError::Api { .. } | FetchError::NotFound => None,
        }
    }

    /// Build the error for a non-2xx response. Uses the body's `message` (or
    /// `error`) when the body is JSON carrying one, otherwise the generic text.
    pub fn from_error_response(status: u16, body: &str) -> Self {
        FetchError::Api {
            status,
            message: error_message_from_body(body)
                .unwrap_or_else(|| GENERIC_NETWORK_MESSAGE.to_string()),
        }
    }
}

/// `message`, else `error`, from a JSON object body. Anything else (arrays,
/// bare strings, non-string fields) carries no usable message.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .filter_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}
