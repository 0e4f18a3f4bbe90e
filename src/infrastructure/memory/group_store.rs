//! In-memory group store

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::group::{GroupId, GroupStore, InviteToken, TransactionGroup};
use crate::domain::store::StoreError;
use crate::domain::user::UserId;

/// Thread-safe in-memory `transaction_groups` collection
///
/// `add_member` performs the set insert under a single write lock, so
/// concurrent joins serialize on the lock and neither update is lost.
#[derive(Debug, Default)]
pub struct InMemoryGroupStore {
    groups: RwLock<BTreeMap<String, TransactionGroup>>,
}

impl InMemoryGroupStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with groups
    pub fn with_groups(groups: Vec<TransactionGroup>) -> Self {
        let store = Self::new();
        {
            let mut map = store.groups.write().unwrap();

            for group in groups {
                map.insert(group.id().as_str().to_string(), group);
            }
        }
        store
    }

    /// Snapshot a group by id, used by tests and fixtures
    pub fn get(&self, id: &GroupId) -> Option<TransactionGroup> {
        self.groups.read().unwrap().get(id.as_str()).cloned()
    }
}

#[async_trait]
impl GroupStore for InMemoryGroupStore {
    async fn find_by_invite_token(
        &self,
        token: &InviteToken,
        limit: usize,
    ) -> Result<Vec<TransactionGroup>, StoreError> {
        let groups = self.groups.read().unwrap();

        let mut matches: Vec<TransactionGroup> = groups
            .values()
            .filter(|g| g.invite_token() == token)
            .cloned()
            .collect();
        matches.truncate(limit);

        Ok(matches)
    }

    async fn add_member(&self, id: &GroupId, user: &UserId) -> Result<(), StoreError> {
        let mut groups = self.groups.write().unwrap();

        let group = groups
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::MissingDocument(id.to_string()))?;
        group.add_member(user.clone());

        Ok(())
    }
}
