//! User domain module
//!
//! Identity records come from an external directory. The core never creates
//! or mutates users; it only resolves callers and pages through the listing.

mod directory;
mod entity;
mod validation;

pub use directory::Directory;
pub use entity::{UserId, UserPage, UserRecord};
pub use validation::{validate_user_id, DirectoryValidationError};

#[cfg(test)]
pub use directory::MockDirectory;
