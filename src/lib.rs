//! Tabshare backend
//!
//! A small service around shared transaction groups:
//! - joining a group via a one-time invite token
//! - public profiles projected from the user directory, with a backfill
//!   command for identities created before the projection existed

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::group::{GroupId, InviteToken, TransactionGroup};
use domain::user::{UserId, UserRecord};
use infrastructure::memory::{InMemoryDirectory, InMemoryGroupStore, InMemoryProfileStore};
use tracing::info;

/// Create the application state backed by in-memory stores
///
/// Seeds a demo user and group so a fresh process is immediately usable:
/// the credential `dev-token-user-42` authenticates as `user_42`, and the
/// invite token `abc123` joins the seeded group.
pub fn create_app_state() -> AppState {
    let demo_user = UserId::new("user_42").expect("demo user id is valid");

    let directory = InMemoryDirectory::with_users(vec![
        UserRecord::new(demo_user.clone()).with_display_name("Demo User"),
    ])
    .with_credential("dev-token-user-42", demo_user);

    let demo_group = TransactionGroup::new(
        GroupId::generate(),
        InviteToken::new("abc123").expect("demo invite token is non-empty"),
    );

    info!(group = %demo_group.id(), "Seeded demo group with invite token 'abc123'");

    let groups = InMemoryGroupStore::with_groups(vec![demo_group]);
    let profiles = InMemoryProfileStore::new();

    AppState::new(Arc::new(directory), Arc::new(groups), Arc::new(profiles))
}
