use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PawbookError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("{0} already exists")]
    Conflict(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing or unknown session token")]
    Unauthorized,

    #[error("Session may not act on {0}")]
    Forbidden(String),
}

impl From<figment::Error> for PawbookError {
    fn from(e: figment::Error) -> Self {
        PawbookError::ConfigError(Box::new(e))
    }
}

impl From<argon2::password_hash::Error> for PawbookError {
    fn from(e: argon2::password_hash::Error) -> Self {
        PawbookError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for PawbookError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PawbookError::DatabaseError(_)
            | PawbookError::ConfigError(_)
            | PawbookError::PasswordHash(_)
            | PawbookError::TaskJoin(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
            PawbookError::Conflict(what) => {
                let status = StatusCode::CONFLICT;
                let body = ApiErrorBody {
                    code: "CONFLICT".to_string(),
                    message: format!("{what} already exists."),
                };
                (status, body)
            }
            PawbookError::NotFound(what) => {
                let status = StatusCode::NOT_FOUND;
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{what} not found."),
                };
                (status, body)
            }
            PawbookError::InvalidCredentials | PawbookError::Unauthorized => {
                let status = StatusCode::UNAUTHORIZED;
                let body = ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: "Authentication error.".to_string(),
                };
                (status, body)
            }
            PawbookError::Forbidden(_) => {
                let status = StatusCode::FORBIDDEN;
                let body = ApiErrorBody {
                    code: "FORBIDDEN".to_string(),
                    message: "Session does not own this resource.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
