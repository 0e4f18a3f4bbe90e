//! Group join endpoint

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireCaller;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Request to join a group by invite token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupRequest {
    /// The one-time invite token identifying the group
    pub invite_token: String,
}

/// Response to a successful join
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupResponse {
    pub success: bool,
    pub group_id: String,
}

/// POST /v1/groups/join
pub async fn join_group(
    State(state): State<AppState>,
    RequireCaller(caller): RequireCaller,
    Json(request): Json<JoinGroupRequest>,
) -> Result<Json<JoinGroupResponse>, ApiError> {
    let joined = state
        .join_service
        .join_by_invite_token(caller.as_str(), &request.invite_token)
        .await?;

    Ok(Json(JoinGroupResponse {
        success: true,
        group_id: joined.group_id.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request: JoinGroupRequest =
            serde_json::from_str(r#"{"inviteToken": "abc123"}"#).unwrap();
        assert_eq!(request.invite_token, "abc123");
    }

    #[test]
    fn test_request_rejects_wrong_type() {
        let result: Result<JoinGroupRequest, _> =
            serde_json::from_str(r#"{"inviteToken": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_rejects_missing_field() {
        let result: Result<JoinGroupRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_response_wire_format() {
        let response = JoinGroupResponse {
            success: true,
            group_id: "G1".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["groupId"], "G1");
    }
}
