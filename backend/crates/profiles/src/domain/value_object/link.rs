//! Link Normalization
//!
//! Website and social URLs are stored in canonical absolute HTTPS form.
//! Inputs without a scheme get `https://` prepended; `http` is upgraded;
//! any other scheme is rejected. Empty values are never normalized.

use kernel::error::app_error::{AppError, AppResult};
use url::Url;

/// Normalize a URL to canonical absolute HTTPS form.
pub fn normalize_https_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("URL cannot be empty"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let mut url = Url::parse(&candidate).map_err(|_| AppError::bad_request("Invalid URL"))?;

    match url.scheme() {
        "https" => {}
        "http" => {
            url.set_scheme("https")
                .map_err(|_| AppError::bad_request("Invalid URL"))?;
        }
        _ => return Err(AppError::bad_request("Invalid URL")),
    }

    Ok(url.to_string())
}

/// Normalize an optional URL field: absent or empty stays `None`.
pub fn normalize_optional_url(raw: Option<&str>) -> AppResult<Option<String>> {
    match raw {
        Some(value) if !value.trim().is_empty() => normalize_https_url(value).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(
            normalize_https_url("example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_http_upgraded_to_https() {
        assert_eq!(
            normalize_https_url("http://twitter.com/alice").unwrap(),
            "https://twitter.com/alice"
        );
    }

    #[test]
    fn test_https_preserved() {
        assert_eq!(
            normalize_https_url("https://github.com/alice").unwrap(),
            "https://github.com/alice"
        );
    }

    #[test]
    fn test_path_and_query_preserved() {
        assert_eq!(
            normalize_https_url("youtube.com/c/alice?tab=videos").unwrap(),
            "https://youtube.com/c/alice?tab=videos"
        );
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(normalize_https_url("ftp://example.com").is_err());
        assert!(normalize_https_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(normalize_https_url("").is_err());
        assert!(normalize_https_url("   ").is_err());
    }

    #[test]
    fn test_optional_empty_stays_none() {
        assert_eq!(normalize_optional_url(None).unwrap(), None);
        assert_eq!(normalize_optional_url(Some("")).unwrap(), None);
        assert_eq!(normalize_optional_url(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_optional_present_normalized() {
        assert_eq!(
            normalize_optional_url(Some("linkedin.com/in/alice")).unwrap(),
            Some("https://linkedin.com/in/alice".to_string())
        );
    }
}
