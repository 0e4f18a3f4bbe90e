//! v1 API endpoints

pub mod groups;
pub mod profiles;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/groups/join", post(groups::join_group))
        .route("/profiles/me", get(profiles::get_own_profile))
        .route("/profiles/{user_id}", get(profiles::get_profile))
}
