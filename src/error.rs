use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::jwt::TokenError;

/// Request-level error taxonomy. Token failures collapse to one uniform
/// 401 body; the precise cause is only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("username already registered")]
    DuplicateUsername,

    #[error("invalid date of birth")]
    InvalidDateOfBirth,

    #[error("could not validate user")]
    AuthenticationFailed,

    #[error("invalid current password")]
    InvalidCurrentPassword,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            ApiError::DuplicateUsername => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Username already registered" }),
            ),
            ApiError::InvalidDateOfBirth => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Invalid DOB" }))
            }
            ApiError::AuthenticationFailed => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Could not validate user" }),
            ),
            ApiError::InvalidCurrentPassword => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid current password" }),
            ),
            ApiError::Token(e) => {
                warn!(reason = %e, "token rejected");
                (
                    StatusCode::UNAUTHORIZED,
                    json!({ "error": "Could not validate user" }),
                )
            }
            ApiError::Database(e) => {
                error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        let err = ApiError::Validation {
            field: "username",
            message: "too short".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::DuplicateUsername.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidDateOfBirth.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn auth_errors_map_to_401() {
        assert_eq!(
            ApiError::AuthenticationFailed.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCurrentPassword.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        for token_err in [
            TokenError::Expired,
            TokenError::InvalidSignature,
            TokenError::MalformedClaims,
        ] {
            assert_eq!(
                ApiError::Token(token_err).into_response().status(),
                StatusCode::UNAUTHORIZED
            );
        }
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
