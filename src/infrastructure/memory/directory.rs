//! In-memory identity directory

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::store::StoreError;
use crate::domain::user::{Directory, UserId, UserPage, UserRecord};

/// Thread-safe in-memory directory
///
/// Users are kept sorted by id so listing order is deterministic; the page
/// token is the id of the last user in the previous page. Credentials map
/// opaque bearer tokens straight to user ids.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<BTreeMap<String, UserRecord>>,
    credentials: RwLock<HashMap<String, UserId>>,
}

impl InMemoryDirectory {
    /// Creates a new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with users
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let directory = Self::new();
        {
            let mut map = directory.users.write().unwrap();

            for user in users {
                map.insert(user.id().as_str().to_string(), user);
            }
        }
        directory
    }

    /// Register a credential for a user (builder pattern)
    pub fn with_credential(self, credential: impl Into<String>, user: UserId) -> Self {
        self.credentials
            .write()
            .unwrap()
            .insert(credential.into(), user);
        self
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn current_caller(&self, credential: &str) -> Result<Option<UserId>, StoreError> {
        let credentials = self.credentials.read().unwrap();
        Ok(credentials.get(credential).cloned())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id.as_str()).cloned())
    }

    async fn list_users<'a>(
        &self,
        page_size: usize,
        page_token: Option<&'a str>,
    ) -> Result<UserPage, StoreError> {
        let users = self.users.read().unwrap();

        let range = match page_token {
            Some(token) => users.range::<str, _>((Bound::Excluded(token), Bound::Unbounded)),
            None => users.range::<str, _>((Bound::Unbounded, Bound::Unbounded)),
        };

        let page: Vec<UserRecord> = range.take(page_size).map(|(_, u)| u.clone()).collect();

        // The token points at the last user served, present only when at
        // least one user remains after it.
        let next_page_token = page.last().and_then(|last| {
            let mut rest = users.range::<str, _>((
                Bound::Excluded(last.id().as_str()),
                Bound::Unbounded,
            ));

            rest.next().map(|_| last.id().as_str().to_string())
        });

        Ok(UserPage {
            users: page,
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserRecord {
        UserRecord::new(UserId::new(id).unwrap())
    }

    fn directory_with_n_users(n: usize) -> InMemoryDirectory {
        InMemoryDirectory::with_users((0..n).map(|i| user(&format!("user_{:03}", i))).collect())
    }

    #[tokio::test]
    async fn test_current_caller_resolves_credential() {
        let directory = InMemoryDirectory::with_users(vec![user("alice")])
            .with_credential("token-alice", UserId::new("alice").unwrap());

        let caller = directory.current_caller("token-alice").await.unwrap();
        assert_eq!(caller, Some(UserId::new("alice").unwrap()));

        let unknown = directory.current_caller("bogus").await.unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_get_user() {
        let directory = InMemoryDirectory::with_users(vec![
            user("alice").with_display_name("Alice"),
        ]);

        let record = directory
            .get_user(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.display_name(), Some("Alice"));

        let absent = directory
            .get_user(&UserId::new("bob").unwrap())
            .await
            .unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn test_list_users_single_page() {
        let directory = directory_with_n_users(3);

        let page = directory.list_users(10, None).await.unwrap();
        assert_eq!(page.users.len(), 3);
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_list_users_pagination_never_repeats_or_skips() {
        let directory = directory_with_n_users(7);

        let mut seen = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = directory.list_users(3, token.as_deref()).await.unwrap();
            seen.extend(page.users.iter().map(|u| u.id().as_str().to_string()));
            token = page.next_page_token;

            if token.is_none() {
                break;
            }
        }

        let expected: Vec<String> = (0..7).map(|i| format!("user_{:03}", i)).collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_list_users_token_absent_on_exact_fit() {
        let directory = directory_with_n_users(4);

        let page = directory.list_users(4, None).await.unwrap();
        assert_eq!(page.users.len(), 4);
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_list_users_empty_directory() {
        let directory = InMemoryDirectory::new();

        let page = directory.list_users(10, None).await.unwrap();
        assert!(page.users.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
