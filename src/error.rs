use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::UserId;

/// Application-level errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid email or password")]
    CredentialsNotFound,

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error("Aggregate over zero rows")]
    EmptyAggregate,

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::CredentialsNotFound | AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::UnknownUser(_) => StatusCode::NOT_FOUND,
            AppError::EmptyAggregate => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::CredentialsNotFound, StatusCode::UNAUTHORIZED),
            (AppError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AppError::DuplicateEmail("a@b.c".into()), StatusCode::CONFLICT),
            (AppError::UnknownUser(42), StatusCode::NOT_FOUND),
            (AppError::EmptyAggregate, StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::InvalidInput("age".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_unknown_user_message_names_id() {
        assert_eq!(AppError::UnknownUser(11).to_string(), "Unknown user: 11");
    }
}
