//! Profile Entity
//!
//! One profile per user, keyed by the user id. Experience and education
//! live inside the profile as ordered sub-collections (newest first) and
//! are persisted as JSONB documents on the profile row.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{EducationId, ExperienceId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::skills::SkillList;

/// Normalized social links
///
/// Each link, when present, is already in canonical absolute HTTPS form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

/// Work experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(rename = "from")]
    pub from_date: NaiveDate,
    #[serde(rename = "to")]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Education entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EducationId,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    #[serde(rename = "from")]
    pub from_date: NaiveDate,
    #[serde(rename = "to")]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Profile entity
#[derive(Debug, Clone)]
pub struct Profile {
    /// Owning user (also the lookup key; at most one profile per user)
    pub user_id: UserId,
    /// Headline / current status
    pub status: String,
    /// Ordered skill list
    pub skills: SkillList,
    pub company: Option<String>,
    /// Canonical absolute HTTPS form when present
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    /// Newest first
    pub experience: Vec<Experience>,
    /// Newest first
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build the top-level profile document for an upsert.
    ///
    /// Sub-collections start empty; on update the store keeps the
    /// existing ones (they are insert-time defaults, never overwritten
    /// by an upsert).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        status: String,
        skills: SkillList,
        company: Option<String>,
        website: Option<String>,
        location: Option<String>,
        bio: Option<String>,
        github_username: Option<String>,
        social: SocialLinks,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            status,
            skills,
            company,
            website,
            location,
            bio,
            github_username,
            social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Prepend an experience entry (newest first ordering)
    pub fn push_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
        self.updated_at = Utc::now();
    }

    /// Remove an experience entry by id; unknown ids are a no-op
    pub fn remove_experience(&mut self, entry_id: Option<ExperienceId>) {
        self.experience.retain(|entry| Some(entry.id) != entry_id);
        self.updated_at = Utc::now();
    }

    /// Prepend an education entry (newest first ordering)
    pub fn push_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
        self.updated_at = Utc::now();
    }

    /// Remove an education entry by id; unknown ids are a no-op
    pub fn remove_education(&mut self, entry_id: Option<EducationId>) {
        self.education.retain(|entry| Some(entry.id) != entry_id);
        self.updated_at = Utc::now();
    }
}

/// Display data of the profile owner, joined in for read endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCard {
    pub name: String,
    pub avatar: String,
}

/// Profile together with its owner's display data
#[derive(Debug, Clone)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: OwnerCard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::skills::{SkillList, SkillsInput};

    fn test_profile() -> Profile {
        Profile::new(
            UserId::new(),
            "Backend developer".to_string(),
            SkillList::parse(SkillsInput::Csv("Rust, SQL".to_string())).unwrap(),
            None,
            None,
            None,
            None,
            None,
            SocialLinks::default(),
        )
    }

    fn test_experience(title: &str) -> Experience {
        Experience {
            id: ExperienceId::new(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to_date: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn test_experience_prepended() {
        let mut profile = test_profile();
        profile.push_experience(test_experience("first"));
        profile.push_experience(test_experience("second"));

        assert_eq!(profile.experience[0].title, "second");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn test_remove_unknown_experience_is_noop() {
        let mut profile = test_profile();
        profile.push_experience(test_experience("kept"));

        profile.remove_experience(Some(ExperienceId::new()));
        assert_eq!(profile.experience.len(), 1);

        profile.remove_experience(None);
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut profile = test_profile();
        let entry = test_experience("gone");
        let entry_id = entry.id;
        profile.push_experience(entry);

        profile.remove_experience(Some(entry_id));
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_experience_wire_field_names() {
        let entry = test_experience("dev");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("from").is_some());
        assert!(json.get("fromDate").is_none());
    }

    #[test]
    fn test_education_wire_field_names() {
        let entry = Education {
            id: EducationId::new(),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
            to_date: Some(NaiveDate::from_ymd_opt(2019, 6, 1).unwrap()),
            current: false,
            description: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("fieldofstudy").is_some());
        assert!(json.get("to").is_some());
    }
}
