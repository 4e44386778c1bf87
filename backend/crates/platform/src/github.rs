//! GitHub Repository Listing Client
//!
//! Thin pass-through client for the GitHub REST API, used to enrich
//! profiles with a user's latest repositories. Responses are forwarded to
//! the caller as raw JSON documents; this crate does not model the GitHub
//! schema.

use thiserror::Error;

/// GitHub client configuration
///
/// Constructed once at startup and passed into [`GithubClient`]; business
/// logic never reads the API token from ambient process state.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL (overridable for tests)
    pub api_base: String,
    /// Optional personal access token for higher rate limits
    pub api_token: Option<String>,
    /// User-Agent header (required by the GitHub API)
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            api_token: None,
            user_agent: "devnetwork-api".to_string(),
        }
    }
}

/// GitHub client errors
#[derive(Debug, Error)]
pub enum GithubError {
    /// Transport-level failure (DNS, TLS, timeout)
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("GitHub returned status {0}")]
    Status(u16),
}

/// GitHub API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// List the five most recently created public repositories for a user.
    ///
    /// The response body is passed through untouched.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<serde_json::Value>, GithubError> {
        let url = format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.config.api_base, username
        );

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent);

        if let Some(token) = &self.config.api_token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(username, status = status.as_u16(), "GitHub lookup failed");
            return Err(GithubError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GithubConfig::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert!(config.api_token.is_none());
        assert!(!config.user_agent.is_empty());
    }

    #[test]
    fn test_client_construction() {
        let client = GithubClient::new(GithubConfig::default());
        assert!(client.config.api_token.is_none());
    }
}
