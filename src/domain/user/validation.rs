//! User identifier validation

use thiserror::Error;

/// Errors that can occur when validating directory inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DirectoryValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID cannot exceed {0} characters")]
    IdTooLong(usize),
}

const MAX_USER_ID_LENGTH: usize = 128;

/// Validate a user ID
///
/// The identity platform assigns opaque uids, so the only constraints are
/// non-empty and a length bound. Ids like `user_42` are valid.
pub fn validate_user_id(id: &str) -> Result<(), DirectoryValidationError> {
    if id.is_empty() {
        return Err(DirectoryValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(DirectoryValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    Ok(())
}
