//! User identity types supplied by the directory

use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, DirectoryValidationError};

/// User identifier - opaque, non-empty, max 128 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, DirectoryValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = DirectoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity record as held by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Directory-assigned identifier
    id: UserId,
    /// Display name, absent for users who never set one
    display_name: Option<String>,
    /// Avatar URL, absent for users without one
    photo_url: Option<String>,
}

impl UserRecord {
    /// Create a new user record
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            display_name: None,
            photo_url: None,
        }
    }

    /// Set the display name (builder pattern)
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the photo URL (builder pattern)
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }
}

/// One page of the user directory listing
#[derive(Debug, Clone)]
pub struct UserPage {
    /// Users in this page, in deterministic directory order
    pub users: Vec<UserRecord>,
    /// Token for fetching the next page; absent when no users remain
    pub next_page_token: Option<String>,
}

impl UserPage {
    /// Whether more pages remain after this one
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}
