//! Skill List Value Object
//!
//! Skills arrive on the wire either as a JSON list (kept as-is) or as a
//! single comma-separated string (split and trimmed).

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Raw skills input as accepted on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Csv(String),
}

/// Ordered, validated skill list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillList(Vec<String>);

impl SkillList {
    /// Parse the wire input into an ordered list
    ///
    /// A list is accepted in the order given; a string is split on commas
    /// with each entry trimmed. An empty result is a validation error.
    pub fn parse(input: SkillsInput) -> AppResult<Self> {
        let skills: Vec<String> = match input {
            SkillsInput::List(list) => list,
            SkillsInput::Csv(csv) => csv
                .split(',')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
        };

        if skills.is_empty() {
            return Err(AppError::bad_request("Skills is required"));
        }

        Ok(Self(skills))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(skills: Vec<String>) -> Self {
        Self(skills)
    }

    /// Get the skills as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_split_and_trimmed() {
        let skills = SkillList::parse(SkillsInput::Csv("Rust,  SQL , HTML".to_string())).unwrap();
        assert_eq!(skills.as_slice(), ["Rust", "SQL", "HTML"]);
    }

    #[test]
    fn test_list_kept_as_is() {
        let skills = SkillList::parse(SkillsInput::List(vec![
            "Rust".to_string(),
            "SQL".to_string(),
        ]))
        .unwrap();
        assert_eq!(skills.as_slice(), ["Rust", "SQL"]);
    }

    #[test]
    fn test_order_preserved() {
        let skills = SkillList::parse(SkillsInput::Csv("c, b, a".to_string())).unwrap();
        assert_eq!(skills.as_slice(), ["c", "b", "a"]);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(SkillList::parse(SkillsInput::Csv("".to_string())).is_err());
        assert!(SkillList::parse(SkillsInput::Csv(" , ,".to_string())).is_err());
        assert!(SkillList::parse(SkillsInput::List(vec![])).is_err());
    }

    #[test]
    fn test_untagged_deserialization() {
        let from_list: SkillsInput = serde_json::from_str(r#"["Rust","SQL"]"#).unwrap();
        assert!(matches!(from_list, SkillsInput::List(_)));

        let from_csv: SkillsInput = serde_json::from_str(r#""Rust, SQL""#).unwrap();
        assert!(matches!(from_csv, SkillsInput::Csv(_)));
    }
}
