use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;

use crate::error::ApiError;

pub fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min {
        return Err(ApiError::Validation {
            field,
            message: format!("{field} must be at least {min} characters long"),
        });
    }
    if len > max {
        return Err(ApiError::Validation {
            field,
            message: format!("{field} must be at most {max} characters long"),
        });
    }
    Ok(())
}

pub fn validate_phone_number(value: &str) -> Result<(), ApiError> {
    lazy_static! {
        static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    }
    if !PHONE_RE.is_match(value) {
        return Err(ApiError::Validation {
            field: "phone_number",
            message: "phone_number must be exactly 10 digits".into(),
        });
    }
    Ok(())
}

/// Convert an epoch-millisecond date of birth to a timestamp. Truncates to
/// whole seconds; no range bounds beyond what the timestamp type supports.
pub fn dob_from_epoch_ms(ms: i64) -> Result<OffsetDateTime, ApiError> {
    OffsetDateTime::from_unix_timestamp(ms / 1000).map_err(|_| ApiError::InvalidDateOfBirth)
}
