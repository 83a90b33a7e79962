// errors.rs
use crate::api::FetchError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the listings API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The listings API failed somewhere a page can't show an inline error.
    #[error("{0}")]
    Upstream(FetchError),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<FetchError> for ServerError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => ServerError::NotFound,
            other => ServerError::Upstream(other),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
