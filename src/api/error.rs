//! Request-level errors and their status codes

use serde::Serialize;
use thiserror::Error;

/// Client-visible failure of a scan request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request body is invalid (400)
    #[error("{0}")]
    BadRequest(String),

    /// The route or the referenced file does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// The request was valid but could not be served (500)
    #[error("{0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }

    /// HTTP reason phrase for this error
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad Request",
            Self::NotFound(_) => "Not Found",
            Self::Internal(_) => "Internal Server Error",
        }
    }

    /// Error body as sent to clients
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code(),
            error: self.reason(),
            message: self.to_string(),
        }
    }
}
