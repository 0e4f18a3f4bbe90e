//! Transaction group validation

use thiserror::Error;

/// Errors that can occur during group validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GroupValidationError {
    #[error("Group ID cannot be empty")]
    EmptyId,

    #[error("Group ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Group ID cannot contain '/'")]
    InvalidIdCharacters,

    #[error("Invite token cannot be empty")]
    EmptyInviteToken,
}

const MAX_GROUP_ID_LENGTH: usize = 128;

/// Validate a group ID
///
/// Ids are store-assigned and opaque; '/' is rejected because it is the
/// document path separator.
pub fn validate_group_id(id: &str) -> Result<(), GroupValidationError> {
    if id.is_empty() {
        return Err(GroupValidationError::EmptyId);
    }

    if id.len() > MAX_GROUP_ID_LENGTH {
        return Err(GroupValidationError::IdTooLong(MAX_GROUP_ID_LENGTH));
    }

    if id.contains('/') {
        return Err(GroupValidationError::InvalidIdCharacters);
    }

    Ok(())
}

/// Validate an invite token
///
/// Tokens are opaque strings issued outside the core; the only check is
/// non-empty.
pub fn validate_invite_token(token: &str) -> Result<(), GroupValidationError> {
    if token.is_empty() {
        return Err(GroupValidationError::EmptyInviteToken);
    }

    Ok(())
}
