//! Profile Read Use Cases

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::profile::ProfileWithOwner;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Profile read use case
pub struct GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's own profile
    ///
    /// A user without a profile is a valid state; it is reported as an
    /// error here, distinct from an empty profile.
    pub async fn me(&self, user_id: &UserId) -> ProfileResult<ProfileWithOwner> {
        self.repo
            .find_with_owner(user_id)
            .await?
            .ok_or(ProfileError::NoProfileForUser)
    }

    /// Public profile lookup by user id
    ///
    /// A value that is not a UUID cannot match any profile, so it maps
    /// to the same not-found error.
    pub async fn by_user_id(&self, raw_user_id: &str) -> ProfileResult<ProfileWithOwner> {
        let user_id: UserId = raw_user_id
            .parse()
            .map_err(|_| ProfileError::ProfileNotFound)?;

        self.repo
            .find_with_owner(&user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)
    }

    /// All profiles (public directory)
    pub async fn list(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        self.repo.list_with_owner().await
    }
}
