//! Store-level fault type shared by the collaborator traits

use thiserror::Error;

/// Faults raised by the document store and the user directory.
///
/// These never reach API callers: services catch every variant at their
/// boundary, log the detail, and re-classify to [`DomainError::Internal`].
///
/// [`DomainError::Internal`]: crate::domain::DomainError::Internal
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the operation at its own permission layer
    #[error("permission denied by store: {0}")]
    PermissionDenied(String),

    /// An update targeted a document that no longer exists
    #[error("document missing: {0}")]
    MissingDocument(String),

    /// Any other backend fault
    #[error("store backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(error.to_string(), "store unavailable: connection refused");

        let error = StoreError::MissingDocument("group-1".to_string());
        assert_eq!(error.to_string(), "document missing: group-1");
    }
}
