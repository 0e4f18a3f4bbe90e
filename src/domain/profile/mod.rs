//! Public profile domain module

mod entity;
mod store;

pub use entity::{PublicProfile, DEFAULT_DISPLAY_NAME};
pub use store::ProfileStore;

#[cfg(test)]
pub use store::mock::MockProfileStore;
