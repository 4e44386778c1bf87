//! Deterministic Avatar Derivation
//!
//! Derives a Gravatar image URL from an email address. The mapping is a
//! pure function of the email, so the same address always resolves to the
//! same avatar without storing any image data.

use md5::{Digest, Md5};

/// Requested image size in pixels
const AVATAR_SIZE: u32 = 200;

/// Content rating ceiling
const AVATAR_RATING: &str = "pg";

/// Fallback image style when the email has no Gravatar account
const AVATAR_DEFAULT: &str = "mm";

/// Derive the Gravatar URL for an email address.
///
/// Gravatar hashes the trimmed, lowercased address with MD5.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s={}&r={}&d={}",
        hex_encode(&digest),
        AVATAR_SIZE,
        AVATAR_RATING,
        AVATAR_DEFAULT
    )
}

/// Encode bytes as lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravatar_known_hash() {
        // Reference hash from the Gravatar documentation
        let url = gravatar_url("MyEmailAddress@example.com ");
        assert!(url.contains("0bc83cb571cd1c50ba6f3e8a78ef1346"));
    }

    #[test]
    fn test_gravatar_deterministic() {
        assert_eq!(gravatar_url("dev@example.com"), gravatar_url("dev@example.com"));
    }

    #[test]
    fn test_gravatar_normalizes_case_and_whitespace() {
        assert_eq!(
            gravatar_url("  Dev@Example.COM "),
            gravatar_url("dev@example.com")
        );
    }

    #[test]
    fn test_gravatar_url_shape() {
        let url = gravatar_url("dev@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));
    }

    #[test]
    fn test_hex_encode() {
        let bytes = [0xab, 0xcd, 0xef];
        assert_eq!(hex_encode(&bytes), "abcdef");
    }
}
