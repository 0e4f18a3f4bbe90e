//! Caller authentication via bearer credentials

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::UserId;

/// Extractor that requires a verified caller identity
///
/// The credential is an opaque already-issued string taken from the
/// `Authorization: Bearer <token>` header and resolved by the directory.
#[derive(Debug, Clone)]
pub struct RequireCaller(pub UserId);

impl FromRequestParts<AppState> for RequireCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = extract_bearer_credential(&parts.headers)?;

        debug!("Resolving caller credential");

        let caller = state
            .directory
            .current_caller(&credential)
            .await
            .map_err(|e| {
                error!(error = %e, "Caller resolution failed");
                ApiError::internal("An error occurred while verifying the caller")
            })?
            .ok_or_else(|| ApiError::unauthenticated("Must be authenticated"))?;

        Ok(RequireCaller(caller))
    }
}

/// Extract the bearer credential from the Authorization header
pub fn extract_bearer_credential(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::invalid_argument("Invalid Authorization header encoding"))?;

        if let Some(credential) = auth_str.strip_prefix("Bearer ") {
            return Ok(credential.trim().to_string());
        }
    }

    Err(ApiError::unauthenticated(
        "Authentication required. Provide a credential via 'Authorization: Bearer <token>' header",
    ))
}
