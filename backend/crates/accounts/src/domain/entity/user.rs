//! User Entity
//!
//! Core user record. Immutable after registration apart from timestamps;
//! the password hash never leaves this crate's serialization boundary.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::avatar::gravatar_url;
use platform::password::HashedPassword;

use crate::domain::value_object::{display_name::DisplayName, email::Email};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name (not unique)
    pub name: DisplayName,
    /// Email address (unique, login identifier)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: HashedPassword,
    /// Avatar URL, derived from the email at registration
    pub avatar_url: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    ///
    /// The avatar is derived deterministically from the email; it is a
    /// snapshot, not re-derived if the scheme ever changes.
    pub fn new(name: DisplayName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        let avatar_url = gravatar_url(email.as_str());

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}
