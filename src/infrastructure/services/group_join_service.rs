//! Group join service - invite token redemption

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::group::{GroupId, GroupStore, InviteToken};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Result of a successful join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedGroup {
    pub group_id: GroupId,
}

/// Service that redeems invite tokens into group memberships
///
/// The workflow is an ordered two-step protocol: resolve the token to a
/// group, then atomically add the caller to its membership set. A failure at
/// either step terminates the call without advancing; there are no retries
/// and no partial state.
#[derive(Debug)]
pub struct GroupJoinService {
    groups: Arc<dyn GroupStore>,
}

impl GroupJoinService {
    /// Create a new GroupJoinService backed by the given store
    pub fn new(groups: Arc<dyn GroupStore>) -> Self {
        Self { groups }
    }

    /// Add the caller to the group holding the supplied invite token
    ///
    /// Idempotent: repeating the call with the same caller and token yields
    /// the same group id and leaves the membership unchanged. Concurrent
    /// calls are safe because the membership update is an atomic
    /// add-if-absent in the store; the set is never read before mutating.
    pub async fn join_by_invite_token(
        &self,
        caller_id: &str,
        invite_token: &str,
    ) -> Result<JoinedGroup, DomainError> {
        let caller = UserId::new(caller_id).map_err(|e| {
            debug!(error = %e, "Join rejected: no verified caller identity");
            DomainError::unauthenticated("Must be authenticated to join a group")
        })?;

        let token = InviteToken::new(invite_token).map_err(|e| {
            debug!(caller = %caller, error = %e, "Join rejected: invalid invite token");
            DomainError::invalid_argument("Must provide a non-empty invite token")
        })?;

        let matches = self
            .groups
            .find_by_invite_token(&token, 1)
            .await
            .map_err(|e| {
                error!(caller = %caller, error = %e, "Invite token lookup failed");
                DomainError::internal("An error occurred while joining the group")
            })?;

        // Tokens are unique across groups, so more than one match means the
        // issuing process violated its invariant. Proceed with the first
        // match rather than failing the caller.
        if matches.len() > 1 {
            warn!(
                caller = %caller,
                matches = matches.len(),
                "Invite token matched more than one group; using the first"
            );
        }

        let Some(group) = matches.into_iter().next() else {
            debug!(caller = %caller, "No group holds the supplied invite token");
            return Err(DomainError::not_found(
                "No transaction group found with the provided invite token",
            ));
        };

        let group_id = group.id().clone();

        self.groups
            .add_member(&group_id, &caller)
            .await
            .map_err(|e| {
                error!(
                    caller = %caller,
                    group = %group_id,
                    error = %e,
                    "Failed to add caller to group membership"
                );
                DomainError::internal("An error occurred while joining the group")
            })?;

        info!(caller = %caller, group = %group_id, "Caller joined group");

        Ok(JoinedGroup { group_id })
    }
}
