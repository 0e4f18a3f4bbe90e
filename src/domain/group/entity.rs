//! Transaction group entity and related types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_group_id, validate_invite_token, GroupValidationError};
use crate::domain::user::UserId;

/// Group identifier - opaque, store-assigned
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Create a new GroupId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, GroupValidationError> {
        let id = id.into();
        validate_group_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random id, used when seeding fixtures
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupId {
    type Error = GroupValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invite token - opaque string, unique across groups at any point in time
///
/// Issuance and rotation happen outside this system; the only in-core
/// validation is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InviteToken(String);

impl InviteToken {
    /// Create a new InviteToken after validation
    pub fn new(token: impl Into<String>) -> Result<Self, GroupValidationError> {
        let token = token.into();
        validate_invite_token(&token)?;
        Ok(Self(token))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InviteToken {
    type Error = GroupValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InviteToken> for String {
    fn from(token: InviteToken) -> Self {
        token.0
    }
}

/// Shared transaction group
///
/// Groups and their tokens are created and rotated by processes outside this
/// system. The core reads `invite_token`/`id` and grows `shared_with` by at
/// most one element per successful join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionGroup {
    /// Unique identifier
    id: GroupId,
    /// Current invite token
    invite_token: InviteToken,
    /// Membership set; ordered for deterministic serialization
    shared_with: BTreeSet<UserId>,
}

impl TransactionGroup {
    /// Create a new group with an empty membership
    pub fn new(id: GroupId, invite_token: InviteToken) -> Self {
        Self {
            id,
            invite_token,
            shared_with: BTreeSet::new(),
        }
    }

    /// Set initial members (builder pattern, used when seeding fixtures)
    pub fn with_members(mut self, members: impl IntoIterator<Item = UserId>) -> Self {
        self.shared_with = members.into_iter().collect();
        self
    }

    // Getters

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn invite_token(&self) -> &InviteToken {
        &self.invite_token
    }

    pub fn shared_with(&self) -> &BTreeSet<UserId> {
        &self.shared_with
    }

    /// Check whether a user is already a member
    pub fn is_member(&self, user: &UserId) -> bool {
        self.shared_with.contains(user)
    }

    // Mutators

    /// Add a user to the membership set
    ///
    /// Returns `true` if the user was newly added, `false` if already present.
    /// Adding an existing member is a no-op, not an error.
    pub fn add_member(&mut self, user: UserId) -> bool {
        self.shared_with.insert(user)
    }
}
