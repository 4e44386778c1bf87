//! Delete Account Use Case
//!
//! Removes everything the user owns. The store performs the cascade
//! (posts, then profile, then user) inside one transaction; a failure
//! mid-cascade rolls back and surfaces as a server error.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// Delete account use case
pub struct DeleteAccountUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId) -> ProfileResult<()> {
        self.repo.delete_account_cascade(&user_id).await?;

        tracing::info!(user_id = %user_id, "Account deleted with posts and profile");

        Ok(())
    }
}
