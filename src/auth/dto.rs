use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::validation::{validate_length, validate_phone_number};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: i64, // epoch milliseconds
    pub phone_number: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_length("username", &self.username, 5, 100)?;
        validate_length("password", &self.password, 6, 100)?;
        validate_length("first_name", &self.first_name, 3, 100)?;
        validate_length("last_name", &self.last_name, 3, 100)?;
        validate_phone_number(&self.phone_number)?;
        Ok(())
    }
}

/// Form body for login (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Bearer token handed out on successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
