//! GitHub Repositories Use Case
//!
//! Pass-through proxy for profile enrichment. Any upstream failure maps
//! to a single not-found error; the status and body of the upstream
//! response never reach the client.

use std::sync::Arc;

use platform::github::GithubClient;

use crate::error::{ProfileError, ProfileResult};

/// GitHub repositories use case
pub struct GithubReposUseCase {
    github: Arc<GithubClient>,
}

impl GithubReposUseCase {
    pub fn new(github: Arc<GithubClient>) -> Self {
        Self { github }
    }

    pub async fn execute(&self, username: &str) -> ProfileResult<Vec<serde_json::Value>> {
        self.github.list_repos(username).await.map_err(|e| {
            tracing::debug!(username, error = %e, "GitHub repo listing failed");
            ProfileError::GithubNotFound
        })
    }
}
