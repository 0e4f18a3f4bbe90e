//! In-memory profile store

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::profile::{ProfileStore, PublicProfile};
use crate::domain::store::StoreError;
use crate::domain::user::UserId;

/// Thread-safe in-memory `publicProfiles` collection
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<BTreeMap<String, PublicProfile>>,
}

impl InMemoryProfileStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with profiles
    pub fn with_profiles(profiles: Vec<PublicProfile>) -> Self {
        let store = Self::new();
        {
            let mut map = store.profiles.write().unwrap();

            for profile in profiles {
                map.insert(profile.user_id().as_str().to_string(), profile);
            }
        }
        store
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError> {
        let profiles = self.profiles.read().unwrap();
        Ok(profiles.get(id.as_str()).cloned())
    }

    async fn create_if_absent(&self, profile: PublicProfile) -> Result<bool, StoreError> {
        let mut profiles = self.profiles.write().unwrap();
        let key = profile.user_id().as_str().to_string();

        if profiles.contains_key(&key) {
            return Ok(false);
        }

        profiles.insert(key, profile);
        Ok(true)
    }
}
