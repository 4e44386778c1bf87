//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use platform::github::GithubClient;
use std::sync::Arc;

use accounts::middleware::AuthUser;

use crate::application::{
    AddEducationInput, AddEducationUseCase, AddExperienceInput, AddExperienceUseCase,
    DeleteAccountUseCase, DeleteEducationUseCase, DeleteExperienceUseCase, GetProfileUseCase,
    GithubReposUseCase, UpsertProfileInput, UpsertProfileUseCase,
};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;
use crate::presentation::dto::{
    AckResponse, EducationRequest, ExperienceRequest, ProfileResponse, ProfileWithOwnerResponse,
    UpsertProfileRequest,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfilesAppState<R>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub github: Arc<GithubClient>,
}

// ============================================================================
// Own profile
// ============================================================================

/// GET /api/profile/me
pub async fn get_my_profile<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> ProfileResult<Json<ProfileWithOwnerResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let profile = use_case.me(&auth.user_id).await?;

    Ok(Json(ProfileWithOwnerResponse::from(&profile)))
}

/// POST /api/profile
pub async fn upsert_profile<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<UpsertProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpsertProfileUseCase::new(state.repo.clone());

    let input = UpsertProfileInput {
        status: req.status,
        skills: req.skills,
        company: req.company,
        website: req.website,
        location: req.location,
        bio: req.bio,
        github_username: req.github_username,
        youtube: req.youtube,
        twitter: req.twitter,
        instagram: req.instagram,
        linkedin: req.linkedin,
        facebook: req.facebook,
    };

    let profile = use_case.execute(auth.user_id, input).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

/// DELETE /api/profile
pub async fn delete_account<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> ProfileResult<Json<AckResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAccountUseCase::new(state.repo.clone());

    use_case.execute(auth.user_id).await?;

    Ok(Json(AckResponse {
        msg: "User deleted".to_string(),
    }))
}

// ============================================================================
// Public directory
// ============================================================================

/// GET /api/profile
pub async fn list_profiles<R>(
    State(state): State<ProfilesAppState<R>>,
) -> ProfileResult<Json<Vec<ProfileWithOwnerResponse>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let profiles = use_case.list().await?;

    Ok(Json(
        profiles.iter().map(ProfileWithOwnerResponse::from).collect(),
    ))
}

/// GET /api/profile/user/{user_id}
pub async fn get_profile_by_user<R>(
    State(state): State<ProfilesAppState<R>>,
    Path(user_id): Path<String>,
) -> ProfileResult<Json<ProfileWithOwnerResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let profile = use_case.by_user_id(&user_id).await?;

    Ok(Json(ProfileWithOwnerResponse::from(&profile)))
}

/// GET /api/profile/github/{username}
pub async fn github_repos<R>(
    State(state): State<ProfilesAppState<R>>,
    Path(username): Path<String>,
) -> ProfileResult<Json<Vec<serde_json::Value>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GithubReposUseCase::new(state.github.clone());

    let repos = use_case.execute(&username).await?;

    Ok(Json(repos))
}

// ============================================================================
// Experience
// ============================================================================

/// PUT /api/profile/experience
pub async fn add_experience<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<ExperienceRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddExperienceUseCase::new(state.repo.clone());

    let input = AddExperienceInput {
        title: req.title,
        company: req.company,
        location: req.location,
        from: req.from,
        to: req.to,
        current: req.current,
        description: req.description,
    };

    let profile = use_case.execute(auth.user_id, input).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn delete_experience<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(exp_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteExperienceUseCase::new(state.repo.clone());

    let profile = use_case.execute(auth.user_id, &exp_id).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

// ============================================================================
// Education
// ============================================================================

/// PUT /api/profile/education
pub async fn add_education<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<EducationRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddEducationUseCase::new(state.repo.clone());

    let input = AddEducationInput {
        school: req.school,
        degree: req.degree,
        field_of_study: req.field_of_study,
        from: req.from,
        to: req.to,
        current: req.current,
        description: req.description,
    };

    let profile = use_case.execute(auth.user_id, input).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn delete_education<R>(
    State(state): State<ProfilesAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(edu_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteEducationUseCase::new(state.repo.clone());

    let profile = use_case.execute(auth.user_id, &edu_id).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}
