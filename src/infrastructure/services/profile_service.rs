//! Profile service - public profile reads, projection, and backfill

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::profile::{ProfileStore, PublicProfile};
use crate::domain::user::{Directory, UserId, UserRecord};
use crate::domain::DomainError;

/// Directory page size used by the backfill
const BACKFILL_PAGE_SIZE: usize = 1000;

/// Totals reported by a backfill run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    /// Directory records examined
    pub scanned: usize,
    /// Profiles newly created
    pub created: usize,
    /// Profiles that already existed
    pub existing: usize,
}

/// Service over the `publicProfiles` projection
pub struct ProfileService {
    directory: Arc<dyn Directory>,
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    /// Create a new ProfileService
    pub fn new(directory: Arc<dyn Directory>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            directory,
            profiles,
        }
    }

    /// Get a public profile by user ID
    pub async fn get(&self, user_id: &str) -> Result<Option<PublicProfile>, DomainError> {
        let user_id = UserId::new(user_id).map_err(|e| {
            debug!(error = %e, "Profile lookup rejected: invalid user id");
            DomainError::invalid_argument(format!("Invalid user id: {}", e))
        })?;

        self.profiles.get(&user_id).await.map_err(|e| {
            error!(user = %user_id, error = %e, "Profile lookup failed");
            DomainError::internal("An error occurred while fetching the profile")
        })
    }

    /// Create the public profile for a directory record if it is missing
    ///
    /// Returns whether a profile was created. An existing profile is never
    /// touched, so repeating the call is safe.
    pub async fn ensure_profile(&self, user: &UserRecord) -> Result<bool, DomainError> {
        let profile = PublicProfile::from_user(user);

        let created = self.profiles.create_if_absent(profile).await.map_err(|e| {
            error!(user = %user.id(), error = %e, "Profile creation failed");
            DomainError::internal("An error occurred while creating the profile")
        })?;

        if created {
            debug!(user = %user.id(), "Created public profile");
        } else {
            debug!(user = %user.id(), "Public profile already exists");
        }

        Ok(created)
    }

    /// Create missing public profiles for every user in the directory
    ///
    /// Pages through the whole directory and `ensure_profile`s each record.
    /// A directory or store fault aborts the run; profiles created before
    /// the fault remain, and rerunning picks up where needed since creation
    /// is idempotent.
    pub async fn backfill(&self) -> Result<BackfillSummary, DomainError> {
        let mut summary = BackfillSummary::default();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .directory
                .list_users(BACKFILL_PAGE_SIZE, page_token.as_deref())
                .await
                .map_err(|e| {
                    error!(error = %e, "Directory listing failed during backfill");
                    DomainError::internal("An error occurred while listing users")
                })?;

            debug!(
                users = page.users.len(),
                has_more = page.has_more(),
                "Processing directory page"
            );

            for user in &page.users {
                summary.scanned += 1;

                if self.ensure_profile(user).await? {
                    summary.created += 1;
                } else {
                    summary.existing += 1;
                }
            }

            page_token = page.next_page_token;

            if page_token.is_none() {
                break;
            }
        }

        info!(
            scanned = summary.scanned,
            created = summary.created,
            existing = summary.existing,
            "Profile backfill completed"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::MockProfileStore;
    use crate::domain::user::{MockDirectory, UserPage};
    use crate::domain::StoreError;

    fn user(id: &str) -> UserRecord {
        UserRecord::new(UserId::new(id).unwrap())
    }

    fn named_user(id: &str, name: &str) -> UserRecord {
        user(id).with_display_name(name)
    }

    /// Directory stub that serves fixed pages keyed by the resume token
    fn paged_directory(pages: Vec<(Option<&str>, Vec<UserRecord>, Option<&str>)>) -> MockDirectory {
        let mut directory = MockDirectory::new();

        for (token, users, next) in pages {
            let token = token.map(String::from);
            let next = next.map(String::from);
            directory
                .expect_list_users()
                .withf(move |size, t| *size == BACKFILL_PAGE_SIZE && *t == token.as_deref())
                .returning(move |_, _| {
                    Ok(UserPage {
                        users: users.clone(),
                        next_page_token: next.clone(),
                    })
                });
        }

        directory
    }

    #[tokio::test]
    async fn test_get_profile_invalid_id() {
        let service = ProfileService::new(
            Arc::new(MockDirectory::new()),
            Arc::new(MockProfileStore::new()),
        );

        let result = service.get("").await;
        assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_get_profile_absent() {
        let service = ProfileService::new(
            Arc::new(MockDirectory::new()),
            Arc::new(MockProfileStore::new()),
        );

        let result = service.get("user_42").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_profile_store_fault_is_internal() {
        let profiles = Arc::new(MockProfileStore::new());
        profiles.fail_with(|| StoreError::Unavailable("down".to_string()));
        let service = ProfileService::new(Arc::new(MockDirectory::new()), profiles);

        let result = service.get("user_42").await;

        let Err(DomainError::Internal { message }) = result else {
            panic!("expected Internal error");
        };
        assert!(!message.contains("down"));
    }

    #[tokio::test]
    async fn test_ensure_profile_creates_once() {
        let profiles = Arc::new(MockProfileStore::new());
        let service = ProfileService::new(Arc::new(MockDirectory::new()), profiles.clone());

        let record = named_user("user_42", "Ada");

        assert!(service.ensure_profile(&record).await.unwrap());
        assert!(!service.ensure_profile(&record).await.unwrap());
        assert_eq!(profiles.len(), 1);

        let profile = service.get("user_42").await.unwrap().unwrap();
        assert_eq!(profile.display_name(), "Ada");
    }

    #[tokio::test]
    async fn test_ensure_profile_never_overwrites() {
        let profiles = Arc::new(MockProfileStore::new());
        let service = ProfileService::new(Arc::new(MockDirectory::new()), profiles.clone());

        service
            .ensure_profile(&named_user("user_42", "Ada"))
            .await
            .unwrap();
        service
            .ensure_profile(&named_user("user_42", "Renamed"))
            .await
            .unwrap();

        let profile = service.get("user_42").await.unwrap().unwrap();
        assert_eq!(profile.display_name(), "Ada");
    }

    #[tokio::test]
    async fn test_ensure_profile_defaults_display_name() {
        let service = ProfileService::new(
            Arc::new(MockDirectory::new()),
            Arc::new(MockProfileStore::new()),
        );

        service.ensure_profile(&user("user_42")).await.unwrap();

        let profile = service.get("user_42").await.unwrap().unwrap();
        assert_eq!(profile.display_name(), "No Name");
    }

    #[tokio::test]
    async fn test_backfill_covers_every_page() {
        let directory = paged_directory(vec![
            (None, vec![user("u1"), user("u2")], Some("u2")),
            (Some("u2"), vec![user("u3")], None),
        ]);
        let profiles = Arc::new(MockProfileStore::new());
        let service = ProfileService::new(Arc::new(directory), profiles.clone());

        let summary = service.backfill().await.unwrap();

        assert_eq!(
            summary,
            BackfillSummary {
                scanned: 3,
                created: 3,
                existing: 0,
            }
        );
        assert_eq!(profiles.len(), 3);
    }

    #[tokio::test]
    async fn test_backfill_skips_existing_profiles() {
        let directory = paged_directory(vec![(None, vec![user("u1"), user("u2")], None)]);
        let profiles = Arc::new(MockProfileStore::with_profiles(vec![
            PublicProfile::from_user(&user("u1")),
        ]));
        let service = ProfileService::new(Arc::new(directory), profiles.clone());

        let summary = service.backfill().await.unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.created, 1);
        assert_eq!(summary.existing, 1);
    }

    #[tokio::test]
    async fn test_backfill_rerun_creates_nothing() {
        let profiles = Arc::new(MockProfileStore::new());

        for _ in 0..2 {
            let directory = paged_directory(vec![(None, vec![user("u1"), user("u2")], None)]);
            let service = ProfileService::new(Arc::new(directory), profiles.clone());
            service.backfill().await.unwrap();
        }

        assert_eq!(profiles.len(), 2);
    }

    #[tokio::test]
    async fn test_backfill_aborts_on_directory_fault() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_users()
            .returning(|_, _| Err(StoreError::Unavailable("down".to_string())));

        let service = ProfileService::new(Arc::new(directory), Arc::new(MockProfileStore::new()));

        let result = service.backfill().await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
