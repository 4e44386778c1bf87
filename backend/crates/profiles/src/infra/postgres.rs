//! PostgreSQL Repository Implementations
//!
//! Sub-collections are JSONB documents on the profile row, mirroring the
//! single-document ownership model. Sub-entry mutation is read-modify-
//! write at the application layer; only the cascade delete runs inside a
//! transaction.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::profile::{
    Education, Experience, OwnerCard, Profile, ProfileWithOwner, SocialLinks,
};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::skills::SkillList;
use crate::error::ProfileResult;

/// PostgreSQL-backed profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn upsert(&self, profile: &Profile) -> ProfileResult<Profile> {
        // Top-level fields are replaced on conflict; experience,
        // education and created_at keep their insert-time values.
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (
                user_id,
                status,
                skills,
                company,
                website,
                location,
                bio,
                github_username,
                social,
                experience,
                education,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                social = EXCLUDED.social,
                updated_at = EXCLUDED.updated_at
            RETURNING
                user_id, status, skills, company, website, location, bio,
                github_username, social, experience, education,
                created_at, updated_at
            "#,
        )
        .bind(profile.user_id.as_uuid())
        .bind(&profile.status)
        .bind(profile.skills.as_slice())
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_profile())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                user_id, status, skills, company, website, location, bio,
                github_username, social, experience, education,
                created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn find_with_owner(&self, user_id: &UserId) -> ProfileResult<Option<ProfileWithOwner>> {
        let row = sqlx::query_as::<_, ProfileWithOwnerRow>(
            r#"
            SELECT
                p.user_id, p.status, p.skills, p.company, p.website,
                p.location, p.bio, p.github_username, p.social,
                p.experience, p.education, p.created_at, p.updated_at,
                u.name AS owner_name,
                u.avatar_url AS owner_avatar
            FROM profiles p
            JOIN users u ON u.user_id = p.user_id
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile_with_owner()))
    }

    async fn list_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        let rows = sqlx::query_as::<_, ProfileWithOwnerRow>(
            r#"
            SELECT
                p.user_id, p.status, p.skills, p.company, p.website,
                p.location, p.bio, p.github_username, p.social,
                p.experience, p.education, p.created_at, p.updated_at,
                u.name AS owner_name,
                u.avatar_url AS owner_avatar
            FROM profiles p
            JOIN users u ON u.user_id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.into_profile_with_owner())
            .collect())
    }

    async fn set_experience(
        &self,
        user_id: &UserId,
        entries: &[Experience],
    ) -> ProfileResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles SET
                experience = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(Json(entries))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_education(&self, user_id: &UserId, entries: &[Education]) -> ProfileResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles SET
                education = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(Json(entries))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_account_cascade(&self, user_id: &UserId) -> ProfileResult<()> {
        // Dependents first, all-or-nothing
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM posts WHERE author_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    status: String,
    skills: Vec<String>,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    github_username: Option<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            user_id: UserId::from_uuid(self.user_id),
            status: self.status,
            skills: SkillList::from_db(self.skills),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            github_username: self.github_username,
            social: self.social.0,
            experience: self.experience.0,
            education: self.education.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileWithOwnerRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    owner_name: String,
    owner_avatar: String,
}

impl ProfileWithOwnerRow {
    fn into_profile_with_owner(self) -> ProfileWithOwner {
        ProfileWithOwner {
            profile: self.profile.into_profile(),
            owner: OwnerCard {
                name: self.owner_name,
                avatar: self.owner_avatar,
            },
        }
    }
}
