//! Profile store trait

use async_trait::async_trait;

use super::entity::PublicProfile;
use crate::domain::store::StoreError;
use crate::domain::user::UserId;

/// Document store for the `publicProfiles` collection
#[async_trait]
pub trait ProfileStore: Send + Sync + std::fmt::Debug {
    /// Get a profile by user ID
    async fn get(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError>;

    /// Create the profile if none exists for its user ID
    ///
    /// Atomic existence-check-and-set. Returns `true` if the profile was
    /// created, `false` if one already existed (the existing document is
    /// left untouched).
    async fn create_if_absent(&self, profile: PublicProfile) -> Result<bool, StoreError>;
}
