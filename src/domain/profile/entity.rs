//! Public profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{UserId, UserRecord};

/// Display name used when the directory record has none
pub const DEFAULT_DISPLAY_NAME: &str = "No Name";

/// Public profile - a one-to-one projection of a directory identity record
///
/// Created once per identity and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    /// Identity this profile projects
    user_id: UserId,
    /// Display name, defaulted when the identity record has none
    display_name: String,
    /// Avatar URL carried over from the identity record
    #[serde(rename = "photoURL")]
    photo_url: Option<String>,
    /// When the projection was created
    created_at: DateTime<Utc>,
}

impl PublicProfile {
    /// Project a directory record into a public profile
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            user_id: user.id().clone(),
            display_name: user
                .display_name()
                .unwrap_or(DEFAULT_DISPLAY_NAME)
                .to_string(),
            photo_url: user.photo_url().map(String::from),
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_carries_fields() {
        let user = UserRecord::new(UserId::new("user_42").unwrap())
            .with_display_name("Ada")
            .with_photo_url("https://example.com/ada.png");

        let profile = PublicProfile::from_user(&user);

        assert_eq!(profile.user_id().as_str(), "user_42");
        assert_eq!(profile.display_name(), "Ada");
        assert_eq!(profile.photo_url(), Some("https://example.com/ada.png"));
    }

    #[test]
    fn test_projection_defaults_display_name() {
        let user = UserRecord::new(UserId::new("user_42").unwrap());

        let profile = PublicProfile::from_user(&user);

        assert_eq!(profile.display_name(), "No Name");
        assert!(profile.photo_url().is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let user = UserRecord::new(UserId::new("user_42").unwrap())
            .with_display_name("Ada")
            .with_photo_url("https://example.com/ada.png");

        let json = serde_json::to_value(PublicProfile::from_user(&user)).unwrap();

        assert_eq!(json["userId"], "user_42");
        assert_eq!(json["displayName"], "Ada");
        assert_eq!(json["photoURL"], "https://example.com/ada.png");
        assert!(json["createdAt"].is_string());
    }
}
