//! Education Sub-Collection Use Cases
//!
//! Same prepend/no-op-delete semantics as experience.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::error::app_error::FieldError;
use kernel::id::{EducationId, UserId};

use crate::application::experience::required;
use crate::domain::entity::profile::{Education, Profile};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Add-education input (raw wire values)
pub struct AddEducationInput {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Add education use case
pub struct AddEducationUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> AddEducationUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: AddEducationInput,
    ) -> ProfileResult<Profile> {
        let mut errors = Vec::new();

        let school = required(&mut errors, "school", "School is required", input.school);
        let degree = required(&mut errors, "degree", "Degree is required", input.degree);
        let field_of_study = required(
            &mut errors,
            "fieldofstudy",
            "Field of study is required",
            input.field_of_study,
        );

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

        if input.current && input.to.is_some() {
            errors.push(FieldError::new(
                "to",
                "A current course cannot have an end date",
            ));
        }

        let (Some(school), Some(degree), Some(field_of_study), Some(from)) =
            (school, degree, field_of_study, input.from)
        else {
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

        profile.push_education(Education {
            id: EducationId::new(),
            school,
            degree,
            field_of_study,
            from_date: from,
            to_date: input.to,
            current: input.current,
            description: input.description,
        });

        self.repo
            .set_education(&user_id, &profile.education)
            .await?;

        Ok(profile)
    }
}

/// Delete education use case
pub struct DeleteEducationUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteEducationUseCase<R>
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

        let entry_id: Option<EducationId> = raw_entry_id.parse().ok();
        profile.remove_education(entry_id);

        self.repo
            .set_education(&user_id, &profile.education)
            .await?;

        Ok(profile)
    }
}
