//! Public profile endpoints

use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::middleware::RequireCaller;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::profile::PublicProfile;

/// Public profile as returned on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub display_name: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PublicProfile> for ProfileResponse {
    fn from(profile: PublicProfile) -> Self {
        Self {
            user_id: profile.user_id().to_string(),
            display_name: profile.display_name().to_string(),
            photo_url: profile.photo_url().map(String::from),
            created_at: profile.created_at(),
        }
    }
}

/// GET /v1/profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    RequireCaller(_caller): RequireCaller,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .get(&user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No profile found for user '{}'", user_id)))?;

    Ok(Json(profile.into()))
}

/// GET /v1/profiles/me
pub async fn get_own_profile(
    State(state): State<AppState>,
    RequireCaller(caller): RequireCaller,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .get(caller.as_str())
        .await?
        .ok_or_else(|| ApiError::not_found("Your profile has not been provisioned yet"))?;

    Ok(Json(profile.into()))
}
