//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::profile::{Education, Experience, Profile, ProfileWithOwner};
use crate::error::ProfileResult;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Create-or-replace keyed by user id
    ///
    /// Top-level fields are fully replaced on conflict; sub-collections
    /// and `created_at` are insert-time defaults and survive updates.
    /// Returns the stored profile.
    async fn upsert(&self, profile: &Profile) -> ProfileResult<Profile>;

    /// Find a profile by its owning user
    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// Find a profile with the owner's display data joined in
    async fn find_with_owner(&self, user_id: &UserId) -> ProfileResult<Option<ProfileWithOwner>>;

    /// All profiles with owner display data
    async fn list_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>>;

    /// Replace the experience sub-collection of a profile
    async fn set_experience(
        &self,
        user_id: &UserId,
        entries: &[Experience],
    ) -> ProfileResult<()>;

    /// Replace the education sub-collection of a profile
    async fn set_education(&self, user_id: &UserId, entries: &[Education]) -> ProfileResult<()>;

    /// Delete everything the user owns: posts, then profile, then the
    /// user record, atomically.
    async fn delete_account_cascade(&self, user_id: &UserId) -> ProfileResult<()>;
}
