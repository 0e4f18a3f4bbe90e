//! Transaction group domain module
//!
//! A group is a shared ledger joined via a one-time invite token. Group and
//! token lifecycle (creation, rotation) happen outside this system; the core
//! only resolves tokens and grows memberships.

mod entity;
mod store;
mod validation;

pub use entity::{GroupId, InviteToken, TransactionGroup};
pub use store::GroupStore;
pub use validation::{validate_group_id, validate_invite_token, GroupValidationError};

#[cfg(test)]
pub use store::mock::MockGroupStore;
