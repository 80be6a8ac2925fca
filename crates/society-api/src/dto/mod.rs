//! Request and response DTOs.

pub mod request;
pub mod response;

use society_core::error::AppError;
use society_core::result::AppResult;
use validator::Validate;

/// Runs validator-derived checks and maps failures to a validation error.
pub fn validate(value: &impl Validate) -> AppResult<()> {
    value
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
