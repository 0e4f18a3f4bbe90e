//! Domain layer - Core business logic and entities

pub mod error;
pub mod group;
pub mod profile;
pub mod store;
pub mod user;

pub use error::DomainError;
pub use group::{
    validate_group_id, validate_invite_token, GroupId, GroupStore, GroupValidationError,
    InviteToken, TransactionGroup,
};
pub use profile::{ProfileStore, PublicProfile};
pub use store::StoreError;
pub use user::{
    validate_user_id, Directory, DirectoryValidationError, UserId, UserPage, UserRecord,
};
