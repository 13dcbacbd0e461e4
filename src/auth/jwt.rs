use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::config::JwtConfig;
use crate::state::AppState;

/// Why a presented token was rejected. Every variant surfaces as the same
/// 401 at the HTTP boundary; they stay distinct for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token claims")]
    MalformedClaims,
}

/// Process-wide signing material, built once from configuration.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    pub access_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from_config(&state.config.jwt)
    }
}

impl JwtKeys {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            algorithm: cfg.algorithm,
            access_ttl: Duration::from_secs((cfg.ttl_minutes as u64) * 60),
        }
    }

    pub fn issue(&self, username: &str, user_id: Uuid, ttl: Duration) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(ttl.as_secs() as i64);
        let claims = Claims {
            username: username.to_owned(),
            user_id,
            exp: exp.unix_timestamp(),
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(%user_id, username, "jwt issued");
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // No leeway: exp must be in the future at validation time.
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::MalformedClaims,
            }
        })?;
        debug!(user_id = %data.claims.user_id, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys::from_config(&JwtConfig {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            ttl_minutes: 60,
        })
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let keys = make_keys("dev-secret");
        let user_id = Uuid::new_v4();
        let token = keys
            .issue("alice12", user_id, keys.access_ttl)
            .expect("issue token");
        let claims = keys.validate(&token).expect("validate token");
        assert_eq!(claims.username, "alice12");
        assert_eq!(claims.user_id, user_id);
        assert!(claims.exp > OffsetDateTime::now_utc().unix_timestamp());
    }

    #[test]
    fn validate_rejects_token_signed_with_other_key() {
        let issuing = make_keys("secret-a");
        let validating = make_keys("secret-b");
        let token = issuing
            .issue("alice12", Uuid::new_v4(), issuing.access_ttl)
            .expect("issue token");
        assert_eq!(
            validating.validate(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn validate_rejects_expired_token() {
        let keys = make_keys("dev-secret");
        let claims = Claims {
            username: "alice12".into(),
            user_id: Uuid::new_v4(),
            exp: OffsetDateTime::now_utc().unix_timestamp() - 3600,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .expect("encode expired token");
        assert_eq!(keys.validate(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn validate_rejects_claims_missing_identity_fields() {
        let keys = make_keys("dev-secret");
        let exp = OffsetDateTime::now_utc().unix_timestamp() + 3600;
        let payload = serde_json::json!({ "user": "alice12", "exp": exp });
        let token = encode(&Header::new(Algorithm::HS256), &payload, &keys.encoding)
            .expect("encode incomplete claims");
        assert_eq!(
            keys.validate(&token).unwrap_err(),
            TokenError::MalformedClaims
        );
    }

    #[test]
    fn validate_rejects_garbage_token() {
        let keys = make_keys("dev-secret");
        assert_eq!(
            keys.validate("not-a-jwt").unwrap_err(),
            TokenError::MalformedClaims
        );
    }
}
