//! Application Layer
//!
//! Use cases and application services.

pub mod delete_account;
pub mod education;
pub mod experience;
pub mod get_profile;
pub mod github;
pub mod upsert_profile;

// Re-exports
pub use delete_account::DeleteAccountUseCase;
pub use education::{AddEducationInput, AddEducationUseCase, DeleteEducationUseCase};
pub use experience::{AddExperienceInput, AddExperienceUseCase, DeleteExperienceUseCase};
pub use get_profile::GetProfileUseCase;
pub use github::GithubReposUseCase;
pub use upsert_profile::{UpsertProfileInput, UpsertProfileUseCase};
