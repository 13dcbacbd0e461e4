use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        extractors::CurrentUser,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
    users::{
        dto::{ChangePasswordRequest, ProfileResponse, UpdateProfileRequest},
        repo::ProfileChanges,
    },
    validation::dob_from_epoch_ms,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_profile).put(update_profile))
        .route("/user/password", put(change_password))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let record = User::find_by_id(&state.db, user.user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.user_id, "token references unknown user");
            ApiError::AuthenticationFailed
        })?;
    Ok(Json(ProfileResponse::from(record)))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;
    let dob = dob_from_epoch_ms(payload.dob)?;

    let changes = ProfileChanges {
        first_name: &payload.first_name,
        last_name: &payload.last_name,
        dob,
        phone_number: &payload.phone_number,
    };
    let updated = User::update_profile(&state.db, user.user_id, &changes).await?;
    if updated == 0 {
        warn!(user_id = %user.user_id, "token references unknown user");
        return Err(ApiError::AuthenticationFailed);
    }

    info!(user_id = %user.user_id, "profile updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;

    let record = User::find_by_id(&state.db, user.user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.user_id, "token references unknown user");
            ApiError::AuthenticationFailed
        })?;

    // The stored hash stays untouched unless the current password checks out.
    if !verify_password(&payload.password, &record.password_hash) {
        warn!(user_id = %record.id, "password change with invalid current password");
        return Err(ApiError::InvalidCurrentPassword);
    }

    let password_hash = hash_password(&payload.new_password)?;
    User::update_password(&state.db, record.id, &password_hash).await?;

    info!(user_id = %record.id, "password changed");
    Ok(StatusCode::NO_CONTENT)
}
