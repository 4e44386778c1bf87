//! Current User Use Case
//!
//! Returns the caller's own user record.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// Current user use case
pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the user behind an authenticated id
    ///
    /// The id comes from a verified token, but the account may have been
    /// deleted since the token was issued.
    pub async fn execute(&self, user_id: &UserId) -> AccountResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }
}
