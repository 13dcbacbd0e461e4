use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::{NewUser, User},
    },
    error::ApiError,
    state::AppState,
    validation::dob_from_epoch_ms,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;
    let dob = dob_from_epoch_ms(payload.dob)?;

    // Ensure username is not taken by a live account
    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already registered");
        return Err(ApiError::DuplicateUsername);
    }

    let password_hash = hash_password(&payload.password)?;
    let new = NewUser {
        username: &payload.username,
        password_hash: &password_hash,
        first_name: &payload.first_name,
        last_name: &payload.last_name,
        dob,
        phone_number: &payload.phone_number,
    };

    // The unique index on username backstops the pre-insert check.
    let user = User::create(&state.db, &new).await.map_err(|e| match e {
        sqlx::Error::Database(ref db_err)
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            ApiError::DuplicateUsername
        }
        other => ApiError::Database(other),
    })?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match User::find_by_username(&state.db, &form.username).await? {
        Some(u) => u,
        None => {
            warn!(username = %form.username, "login for unknown username");
            return Err(ApiError::AuthenticationFailed);
        }
    };

    if !verify_password(&form.password, &user.password_hash) {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::AuthenticationFailed);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.issue(&user.username, user.id, keys.access_ttl)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    }))
}
