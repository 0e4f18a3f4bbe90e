use thiserror::Error;

/// Core domain errors
///
/// This is the full taxonomy callers can observe. Store-level faults never
/// cross the service boundary; they are logged and surfaced as `Internal`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
