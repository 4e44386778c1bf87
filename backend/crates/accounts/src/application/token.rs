//! Token Service
//!
//! Issues and verifies signed, time-limited identity tokens. A token is
//! `"{user_id}.{expires_at_ms}.{signature}"` where the signature is a
//! URL-safe base64 HMAC-SHA256 over the first two segments. Stateless
//! given the signing secret held in [`AccountsConfig`].

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use sha2::Sha256;
use thiserror::Error;

use crate::application::config::AccountsConfig;

/// Token verification failures
///
/// All variants surface to HTTP clients as a single unauthorized
/// condition; the split exists for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the expected shape
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not match
    #[error("Token signature mismatch")]
    BadSignature,

    /// Token is past its expiry
    #[error("Token has expired")]
    Expired,
}

/// Token issue/verify service
#[derive(Clone)]
pub struct TokenService {
    config: Arc<AccountsConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AccountsConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for a user, expiring one TTL from now
    pub fn issue(&self, user_id: &UserId) -> String {
        let expires_at_ms = Utc::now().timestamp_millis() + self.config.token_ttl_ms();
        self.issue_with_expiry(user_id, expires_at_ms)
    }

    fn issue_with_expiry(&self, user_id: &UserId, expires_at_ms: i64) -> String {
        let payload = format!("{}.{}", user_id, expires_at_ms);
        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Verify a token, returning the embedded user id
    ///
    /// The signature is checked (in constant time) before the expiry, so
    /// a forged token can never learn whether its expiry would have been
    /// accepted.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let (payload, signature_b64) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let (id_str, expiry_str) = payload.split_once('.').ok_or(TokenError::Malformed)?;
        let expires_at_ms: i64 = expiry_str.parse().map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp_millis() >= expires_at_ms {
            return Err(TokenError::Expired);
        }

        id_str.parse().map_err(|_| TokenError::Malformed)
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}
