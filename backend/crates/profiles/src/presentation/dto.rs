//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entity::profile::{
    Education, Experience, OwnerCard, Profile, ProfileWithOwner, SocialLinks,
};
use crate::domain::value_object::skills::SkillsInput;

// ============================================================================
// Upsert
// ============================================================================

/// Upsert profile request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub status: Option<String>,
    pub skills: Option<SkillsInput>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

// ============================================================================
// Sub-collections
// ============================================================================

/// Add experience request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Add education request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Profile response (owner as a plain id, e.g. after an upsert)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: String,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            user: profile.user_id.to_string(),
            status: profile.status.clone(),
            skills: profile.skills.as_slice().to_vec(),
            company: profile.company.clone(),
            website: profile.website.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            github_username: profile.github_username.clone(),
            social: profile.social.clone(),
            experience: profile.experience.clone(),
            education: profile.education.clone(),
            created_at_ms: profile.created_at.timestamp_millis(),
            updated_at_ms: profile.updated_at.timestamp_millis(),
        }
    }
}

/// Owner display data embedded in read responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOwnerDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// Profile response with the owner's display data joined in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWithOwnerResponse {
    pub user: ProfileOwnerDto,
    #[serde(flatten)]
    pub profile: ProfileBody,
}

/// Shared profile body for owner-joined responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<&ProfileWithOwner> for ProfileWithOwnerResponse {
    fn from(with_owner: &ProfileWithOwner) -> Self {
        let profile = &with_owner.profile;
        Self {
            user: ProfileOwnerDto {
                id: profile.user_id.to_string(),
                name: with_owner.owner.name.clone(),
                avatar: with_owner.owner.avatar.clone(),
            },
            profile: ProfileBody {
                status: profile.status.clone(),
                skills: profile.skills.as_slice().to_vec(),
                company: profile.company.clone(),
                website: profile.website.clone(),
                location: profile.location.clone(),
                bio: profile.bio.clone(),
                github_username: profile.github_username.clone(),
                social: profile.social.clone(),
                experience: profile.experience.clone(),
                education: profile.education.clone(),
                created_at_ms: profile.created_at.timestamp_millis(),
                updated_at_ms: profile.updated_at.timestamp_millis(),
            },
        }
    }
}

/// Simple acknowledgement response
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request_accepts_csv_skills() {
        let json = r#"{"status":"dev","skills":"Rust, SQL"}"#;
        let request: UpsertProfileRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request.skills, Some(SkillsInput::Csv(_))));
    }

    #[test]
    fn test_upsert_request_accepts_list_skills() {
        let json = r#"{"status":"dev","skills":["Rust","SQL"]}"#;
        let request: UpsertProfileRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request.skills, Some(SkillsInput::List(_))));
    }

    #[test]
    fn test_experience_request_wire_names() {
        let json = r#"{"title":"Dev","company":"Acme","from":"2020-01-01","to":"2021-06-30"}"#;
        let request: ExperienceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.from, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(request.to, NaiveDate::from_ymd_opt(2021, 6, 30));
        assert!(!request.current);
    }

    #[test]
    fn test_education_request_fieldofstudy_name() {
        let json = r#"{"school":"MIT","degree":"BSc","fieldofstudy":"CS","from":"2015-09-01"}"#;
        let request: EducationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.field_of_study.as_deref(), Some("CS"));
    }
}
