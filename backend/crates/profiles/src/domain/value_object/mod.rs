//! Value Object Module

pub mod link;
pub mod skills;

pub use link::{normalize_https_url, normalize_optional_url};
pub use skills::{SkillList, SkillsInput};
