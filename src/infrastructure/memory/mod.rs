//! In-memory collaborator implementations
//!
//! Useful for development and testing. Data is lost when the process
//! terminates.

mod directory;
mod group_store;
mod profile_store;

pub use directory::InMemoryDirectory;
pub use group_store::InMemoryGroupStore;
pub use profile_store::InMemoryProfileStore;
