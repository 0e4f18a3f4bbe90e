//! Infrastructure services

mod group_join_service;
mod profile_service;

pub use group_join_service::{GroupJoinService, JoinedGroup};
pub use profile_service::{BackfillSummary, ProfileService};
