use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::validation::{validate_length, validate_phone_number};

/// Profile as returned to its owner. The password hash and the
/// `is_active`/`is_deleted` flags stay server-side.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub dob: OffsetDateTime,
    pub phone_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            dob: user.dob,
            phone_number: user.phone_number,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for profile updates.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub dob: i64, // epoch milliseconds
    pub phone_number: String,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_length("first_name", &self.first_name, 3, 100)?;
        validate_length("last_name", &self.last_name, 3, 100)?;
        validate_phone_number(&self.phone_number)?;
        Ok(())
    }
}

/// Request body for password changes.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String, // current password, re-verified before the swap
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_length("new_password", &self.new_password, 6, 100)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn profile_response_omits_credentials_and_flags() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice12".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            first_name: "Alice".into(),
            last_name: "Example".into(),
            dob: datetime!(1990-04-02 00:00:00 UTC),
            phone_number: "9876543210".into(),
            created_at: datetime!(2024-01-26 06:48:29 UTC),
            updated_at: datetime!(2024-01-26 06:48:29 UTC),
            is_active: true,
            is_deleted: false,
        };

        let json = serde_json::to_value(ProfileResponse::from(user)).unwrap();
        assert_eq!(json["username"], "alice12");
        assert_eq!(json["dob"], "1990-04-02T00:00:00Z");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("is_active").is_none());
        assert!(json.get("is_deleted").is_none());
    }

    #[test]
    fn short_new_password_is_rejected() {
        let req = ChangePasswordRequest {
            password: "secret1".into(),
            new_password: "12345".into(),
        };
        match req.validate().unwrap_err() {
            ApiError::Validation { field, .. } => assert_eq!(field, "new_password"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn profile_update_validation_covers_all_fields() {
        let valid = UpdateProfileRequest {
            first_name: "Alice".into(),
            last_name: "Example".into(),
            dob: 1706251709000,
            phone_number: "9876543210".into(),
        };
        assert!(valid.validate().is_ok());

        let bad_phone = UpdateProfileRequest {
            phone_number: "123".into(),
            ..valid
        };
        assert!(bad_phone.validate().is_err());
    }
}
