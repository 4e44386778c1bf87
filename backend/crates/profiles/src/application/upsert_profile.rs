//! Upsert Profile Use Case
//!
//! Creates the caller's profile or fully replaces its top-level fields.

use std::sync::Arc;

use kernel::error::app_error::FieldError;
use kernel::id::UserId;

use crate::domain::entity::profile::{Profile, SocialLinks};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::link::normalize_optional_url;
use crate::domain::value_object::skills::{SkillList, SkillsInput};
use crate::error::{ProfileError, ProfileResult};

/// Upsert input (raw wire values)
pub struct UpsertProfileInput {
    pub status: Option<String>,
    pub skills: Option<SkillsInput>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

/// Upsert profile use case
pub struct UpsertProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> UpsertProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: UpsertProfileInput,
    ) -> ProfileResult<Profile> {
        let mut errors = Vec::new();

        let status = match input.status {
            Some(status) if !status.trim().is_empty() => Some(status.trim().to_string()),
            _ => {
                errors.push(FieldError::new("status", "Status is required"));
                None
            }
        };

        let skills = match input.skills {
            Some(skills) => SkillList::parse(skills)
                .map_err(|e| errors.push(FieldError::new("skills", e.message().to_owned())))
                .ok(),
            None => {
                errors.push(FieldError::new("skills", "Skills is required"));
                None
            }
        };

        // Links are normalized to canonical absolute HTTPS form; empty or
        // absent values stay empty.
        let website = normalize_link(&mut errors, "website", input.website);
        let social = SocialLinks {
            youtube: normalize_link(&mut errors, "youtube", input.youtube),
            twitter: normalize_link(&mut errors, "twitter", input.twitter),
            instagram: normalize_link(&mut errors, "instagram", input.instagram),
            linkedin: normalize_link(&mut errors, "linkedin", input.linkedin),
            facebook: normalize_link(&mut errors, "facebook", input.facebook),
        };

        let (Some(status), Some(skills)) = (status, skills) else {
            return Err(ProfileError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(ProfileError::Validation(errors));
        }

        let profile = Profile::new(
            user_id,
            status,
            skills,
            none_if_blank(input.company),
            website,
            none_if_blank(input.location),
            none_if_blank(input.bio),
            none_if_blank(input.github_username),
            social,
        );

        let stored = self.repo.upsert(&profile).await?;

        tracing::info!(user_id = %user_id, "Profile upserted");

        Ok(stored)
    }
}

fn normalize_link(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match normalize_optional_url(value.as_deref()) {
        Ok(normalized) => normalized,
        Err(e) => {
            errors.push(FieldError::new(field, e.message().to_owned()));
            None
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}
