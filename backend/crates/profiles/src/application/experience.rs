//! Experience Sub-Collection Use Cases
//!
//! Entries are prepended (newest first); removal by an unknown id is a
//! no-op, not an error.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::error::app_error::FieldError;
use kernel::id::{ExperienceId, UserId};

use crate::domain::entity::profile::{Experience, Profile};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Add-experience input (raw wire values)
pub struct AddExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Add experience use case
pub struct AddExperienceUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> AddExperienceUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: AddExperienceInput,
    ) -> ProfileResult<Profile> {
        let mut errors = Vec::new();

        let title = required(&mut errors, "title", "Title is required", input.title);
        let company = required(&mut errors, "company", "Company is required", input.company);

        if input.from.is_none() {
            errors.push(FieldError::new(
                "from",
                "From date is required and needs to be from the past",
            ));
        } else if let (Some(from), Some(to)) = (input.from, input.to) {
            if from >= to {
                errors.push(FieldError::new(
                    "from",
                    "From date is required and needs to be from the past",
                ));
            }
        }

        // A current position has no end by definition
        if input.current && input.to.is_some() {
            errors.push(FieldError::new(
                "to",
                "A current position cannot have an end date",
            ));
        }

        let (Some(title), Some(company), Some(from)) = (title, company, input.from) else {
            return Err(ProfileError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(ProfileError::Validation(errors));
        }

        let mut profile = self
            .repo
            .find_by_user_id(&user_id)
            .await?
            .ok_or(ProfileError::NoProfileForUser)?;

        profile.push_experience(Experience {
            id: ExperienceId::new(),
            title,
            company,
            location: input.location,
            from_date: from,
            to_date: input.to,
            current: input.current,
            description: input.description,
        });

        self.repo
            .set_experience(&user_id, &profile.experience)
            .await?;

        Ok(profile)
    }
}

/// Delete experience use case
pub struct DeleteExperienceUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteExperienceUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, raw_entry_id: &str) -> ProfileResult<Profile> {
        let mut profile = self
            .repo
            .find_by_user_id(&user_id)
            .await?
            .ok_or(ProfileError::NoProfileForUser)?;

        // A non-UUID id matches nothing, same as an unknown one
        let entry_id: Option<ExperienceId> = raw_entry_id.parse().ok();
        profile.remove_experience(entry_id);

        self.repo
            .set_experience(&user_id, &profile.experience)
            .await?;

        Ok(profile)
    }
}

pub(crate) fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    message: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}
