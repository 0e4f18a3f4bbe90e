//! Group store trait - the document store collaborator

use async_trait::async_trait;

use super::entity::{GroupId, InviteToken, TransactionGroup};
use crate::domain::store::StoreError;
use crate::domain::user::UserId;

/// Document store for the `transaction_groups` collection
///
/// Concurrency correctness of the join workflow relies entirely on
/// `add_member` being an atomic add-if-absent on the membership set; callers
/// never read the set before mutating it.
#[async_trait]
pub trait GroupStore: Send + Sync + std::fmt::Debug {
    /// Find groups whose `inviteToken` field equals the supplied token
    ///
    /// Returns at most `limit` matches. Under the token-uniqueness invariant
    /// this is zero or one group.
    async fn find_by_invite_token(
        &self,
        token: &InviteToken,
        limit: usize,
    ) -> Result<Vec<TransactionGroup>, StoreError>;

    /// Atomically add a user to a group's `sharedWith` set
    ///
    /// Idempotent: adding an already-present member succeeds without change.
    async fn add_member(&self, id: &GroupId, user: &UserId) -> Result<(), StoreError>;
}
