//! Register Use Case
//!
//! Creates a new user account and issues the first token.

use std::sync::Arc;

use kernel::error::app_error::FieldError;
use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{display_name::DisplayName, email::Email};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        // Validate all fields up front so the response carries every
        // problem at once, not just the first.
        let mut errors = Vec::new();

        let name = DisplayName::new(input.name)
            .map_err(|e| errors.push(FieldError::new("name", e.message().to_owned())))
            .ok();
        let email = Email::new(input.email)
            .map_err(|e| errors.push(FieldError::new("email", e.message().to_owned())))
            .ok();
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| errors.push(FieldError::new("password", e.to_string())))
            .ok();

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AccountError::Validation(errors));
        };

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let user = User::new(name, email, password_hash);

        // Email uniqueness is enforced by the store; a duplicate surfaces
        // here as EmailTaken without a separate pre-check.
        self.repo.create(&user).await?;

        let token = TokenService::new(self.config.clone()).issue(&user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            "User registered"
        );

        Ok(RegisterOutput { token })
    }
}
