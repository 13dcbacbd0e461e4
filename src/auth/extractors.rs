use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::{JwtKeys, TokenError};
use crate::error::ApiError;
use crate::state::AppState;

/// Identity proven by the bearer token on the request. Handlers receive
/// this as an ordinary argument; request bodies never carry an id.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                warn!("missing Authorization header");
                ApiError::Token(TokenError::MalformedClaims)
            })?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| {
                warn!("Authorization header is not a bearer token");
                ApiError::Token(TokenError::MalformedClaims)
            })?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.validate(token)?;

        Ok(CurrentUser {
            user_id: claims.user_id,
            username: claims.username,
        })
    }
}
