//! Application state for shared services

use std::sync::Arc;

use crate::domain::group::GroupStore;
use crate::domain::profile::ProfileStore;
use crate::domain::user::Directory;
use crate::infrastructure::services::{GroupJoinService, ProfileService};

/// Application state shared by all request handlers
///
/// Handlers are stateless; everything mutable lives behind the injected
/// collaborators.
#[derive(Clone)]
pub struct AppState {
    pub join_service: Arc<GroupJoinService>,
    pub profile_service: Arc<ProfileService>,
    pub directory: Arc<dyn Directory>,
    pub group_store: Arc<dyn GroupStore>,
}

impl AppState {
    /// Wire up the state from its collaborators
    pub fn new(
        directory: Arc<dyn Directory>,
        groups: Arc<dyn GroupStore>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            join_service: Arc::new(GroupJoinService::new(groups.clone())),
            profile_service: Arc::new(ProfileService::new(directory.clone(), profiles)),
            directory,
            group_store: groups,
        }
    }
}
