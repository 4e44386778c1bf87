//! Unit tests for the profiles crate
//!
//! Use cases are driven through an in-memory repository; nothing here
//! touches PostgreSQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use kernel::id::UserId;
use uuid::Uuid;

use crate::application::{
    AddExperienceInput, AddExperienceUseCase, DeleteAccountUseCase, DeleteExperienceUseCase,
    UpsertProfileInput, UpsertProfileUseCase,
};
use crate::domain::entity::profile::{Education, Experience, OwnerCard, Profile, ProfileWithOwner};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::skills::SkillsInput;
use crate::error::{ProfileError, ProfileResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<Uuid, Profile>>>,
    deleted_users: Arc<Mutex<Vec<Uuid>>>,
}

impl ProfileRepository for MemoryProfileRepository {
    async fn upsert(&self, profile: &Profile) -> ProfileResult<Profile> {
        let mut profiles = self.profiles.lock().unwrap();
        let key = profile.user_id.into_uuid();

        let stored = match profiles.remove(&key) {
            // Replace top-level fields, keep sub-collections and created_at
            Some(existing) => Profile {
                experience: existing.experience,
                education: existing.education,
                created_at: existing.created_at,
                ..profile.clone()
            },
            None => profile.clone(),
        };

        profiles.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.get(user_id.as_uuid()).cloned())
    }

    async fn find_with_owner(&self, user_id: &UserId) -> ProfileResult<Option<ProfileWithOwner>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.get(user_id.as_uuid()).map(|profile| ProfileWithOwner {
            profile: profile.clone(),
            owner: OwnerCard {
                name: "Owner".to_string(),
                avatar: "https://www.gravatar.com/avatar/0".to_string(),
            },
        }))
    }

    async fn list_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles
            .values()
            .map(|profile| ProfileWithOwner {
                profile: profile.clone(),
                owner: OwnerCard {
                    name: "Owner".to_string(),
                    avatar: "https://www.gravatar.com/avatar/0".to_string(),
                },
            })
            .collect())
    }

    async fn set_experience(
        &self,
        user_id: &UserId,
        entries: &[Experience],
    ) -> ProfileResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(profile) = profiles.get_mut(user_id.as_uuid()) {
            profile.experience = entries.to_vec();
        }
        Ok(())
    }

    async fn set_education(&self, user_id: &UserId, entries: &[Education]) -> ProfileResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(profile) = profiles.get_mut(user_id.as_uuid()) {
            profile.education = entries.to_vec();
        }
        Ok(())
    }

    async fn delete_account_cascade(&self, user_id: &UserId) -> ProfileResult<()> {
        self.profiles.lock().unwrap().remove(user_id.as_uuid());
        self.deleted_users.lock().unwrap().push(user_id.into_uuid());
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn upsert_input(status: &str, skills: &str) -> UpsertProfileInput {
    UpsertProfileInput {
        status: Some(status.to_string()),
        skills: Some(SkillsInput::Csv(skills.to_string())),
        company: None,
        website: None,
        location: None,
        bio: None,
        github_username: None,
        youtube: None,
        twitter: None,
        instagram: None,
        linkedin: None,
        facebook: None,
    }
}

fn experience_input(from: &str, to: Option<&str>, current: bool) -> AddExperienceInput {
    AddExperienceInput {
        title: Some("Developer".to_string()),
        company: Some("Acme".to_string()),
        location: None,
        from: Some(from.parse::<NaiveDate>().unwrap()),
        to: to.map(|d| d.parse::<NaiveDate>().unwrap()),
        current,
        description: None,
    }
}

async fn upsert(
    repo: &Arc<MemoryProfileRepository>,
    user_id: UserId,
    input: UpsertProfileInput,
) -> ProfileResult<Profile> {
    UpsertProfileUseCase::new(repo.clone())
        .execute(user_id, input)
        .await
}

// ============================================================================
// Upsert
// ============================================================================

#[cfg(test)]
mod upsert_tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_twice_keeps_single_record_and_replaces_top_level() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();

        upsert(&repo, user_id, upsert_input("Junior dev", "Rust"))
            .await
            .unwrap();
        let second = upsert(&repo, user_id, upsert_input("Senior dev", "Rust, SQL"))
            .await
            .unwrap();

        assert_eq!(repo.profiles.lock().unwrap().len(), 1);
        assert_eq!(second.status, "Senior dev");
        assert_eq!(second.skills.as_slice(), ["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn test_upsert_preserves_sub_collections() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();

        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();

        AddExperienceUseCase::new(repo.clone())
            .execute(user_id, experience_input("2020-01-01", None, true))
            .await
            .unwrap();

        let replaced = upsert(&repo, user_id, upsert_input("Lead", "Rust"))
            .await
            .unwrap();

        assert_eq!(replaced.status, "Lead");
        assert_eq!(replaced.experience.len(), 1, "upsert must not clobber experience");
    }

    #[tokio::test]
    async fn test_upsert_missing_status_and_skills_collects_both() {
        let repo = Arc::new(MemoryProfileRepository::default());

        let input = UpsertProfileInput {
            status: None,
            skills: None,
            ..upsert_input("", "")
        };
        let err = upsert(&repo, UserId::new(), input).await.unwrap_err();

        match err {
            ProfileError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_ref()).collect();
                assert_eq!(fields, vec!["status", "skills"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upsert_normalizes_links() {
        let repo = Arc::new(MemoryProfileRepository::default());

        let mut input = upsert_input("Dev", "Rust");
        input.website = Some("example.com".to_string());
        input.twitter = Some("http://twitter.com/alice".to_string());
        input.youtube = Some("".to_string());

        let profile = upsert(&repo, UserId::new(), input).await.unwrap();

        assert_eq!(profile.website.as_deref(), Some("https://example.com/"));
        assert_eq!(
            profile.social.twitter.as_deref(),
            Some("https://twitter.com/alice")
        );
        // Empty values are never normalized
        assert_eq!(profile.social.youtube, None);
    }
}

// ============================================================================
// Experience
// ============================================================================

#[cfg(test)]
mod experience_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_experience_prepends() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();

        let use_case = AddExperienceUseCase::new(repo.clone());
        use_case
            .execute(user_id, experience_input("2018-01-01", Some("2019-12-31"), false))
            .await
            .unwrap();
        let profile = use_case
            .execute(user_id, experience_input("2020-01-01", None, true))
            .await
            .unwrap();

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(
            profile.experience[0].from_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_from_after_to_rejected() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();

        let err = AddExperienceUseCase::new(repo.clone())
            .execute(user_id, experience_input("2020-01-01", Some("2019-01-01"), false))
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileError::Validation(_)));
    }

    #[tokio::test]
    async fn test_current_with_end_date_rejected() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();

        let err = AddExperienceUseCase::new(repo.clone())
            .execute(user_id, experience_input("2020-01-01", Some("2021-01-01"), true))
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileError::Validation(_)));
    }

    #[tokio::test]
    async fn test_add_experience_without_profile_fails() {
        let repo = Arc::new(MemoryProfileRepository::default());

        let err = AddExperienceUseCase::new(repo.clone())
            .execute(UserId::new(), experience_input("2020-01-01", None, true))
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileError::NoProfileForUser));
    }

    #[tokio::test]
    async fn test_delete_unknown_experience_is_noop_success() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();
        AddExperienceUseCase::new(repo.clone())
            .execute(user_id, experience_input("2020-01-01", None, true))
            .await
            .unwrap();

        let use_case = DeleteExperienceUseCase::new(repo.clone());

        // Unknown UUID and non-UUID ids both leave the collection alone
        let profile = use_case
            .execute(user_id, &Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert_eq!(profile.experience.len(), 1);

        let profile = use_case.execute(user_id, "not-a-uuid").await.unwrap();
        assert_eq!(profile.experience.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_experience_by_id() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();
        let profile = AddExperienceUseCase::new(repo.clone())
            .execute(user_id, experience_input("2020-01-01", None, true))
            .await
            .unwrap();
        let entry_id = profile.experience[0].id;

        let profile = DeleteExperienceUseCase::new(repo.clone())
            .execute(user_id, &entry_id.to_string())
            .await
            .unwrap();

        assert!(profile.experience.is_empty());
    }
}

// ============================================================================
// Account deletion
// ============================================================================

#[cfg(test)]
mod delete_account_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_account_cascades() {
        let repo = Arc::new(MemoryProfileRepository::default());
        let user_id = UserId::new();
        upsert(&repo, user_id, upsert_input("Dev", "Rust"))
            .await
            .unwrap();

        DeleteAccountUseCase::new(repo.clone())
            .execute(user_id)
            .await
            .unwrap();

        assert!(repo.profiles.lock().unwrap().is_empty());
        assert_eq!(
            repo.deleted_users.lock().unwrap().as_slice(),
            &[user_id.into_uuid()]
        );
    }
}
