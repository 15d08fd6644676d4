use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the lifecycle operations on a ledger snapshot.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("promo not found: {0}")]
    NotFound(String),
    #[error("promo already completed: {0}")]
    AlreadyCompleted(String),
    #[error("invalid input: {0}")]
    Validation(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::NotFound(_) => Self::not_found(message),
            LedgerError::AlreadyCompleted(_) => Self::conflict(message),
            LedgerError::Validation(_) => Self::bad_request(message),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
