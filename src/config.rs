use anyhow::Context;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(v) => {
                let alg: Algorithm = v
                    .parse()
                    .map_err(|_| anyhow::anyhow!("unsupported JWT_ALGORITHM: {v}"))?;
                // The signing key is a shared secret, so only HMAC applies.
                anyhow::ensure!(
                    matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512),
                    "JWT_ALGORITHM must be one of HS256, HS384, HS512"
                );
                alg
            }
            Err(_) => Algorithm::HS256,
        };
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            algorithm,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        Ok(Self { database_url, jwt })
    }
}
