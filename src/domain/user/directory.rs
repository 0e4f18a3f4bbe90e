//! Directory trait - the identity store collaborator

use async_trait::async_trait;

use super::entity::{UserId, UserPage, UserRecord};
use crate::domain::store::StoreError;

#[cfg(test)]
use mockall::automock;

/// Identity store for authenticated users
///
/// Credential resolution and user management live entirely behind this trait;
/// the core treats the credential as an opaque already-issued string.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    /// Resolve a caller credential to a verified user identity
    ///
    /// Returns `None` when the credential does not correspond to any user.
    async fn current_caller(&self, credential: &str) -> Result<Option<UserId>, StoreError>;

    /// Get a user record by ID
    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError>;

    /// List users in deterministic order, one page at a time
    ///
    /// Pass the previous page's `next_page_token` to resume; `None` starts
    /// from the beginning.
    async fn list_users<'a>(
        &self,
        page_size: usize,
        page_token: Option<&'a str>,
    ) -> Result<UserPage, StoreError>;
}
