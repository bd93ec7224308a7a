//! Session Token Service
//!
//! Issues and verifies the stateless bearer credential carried in the
//! session cookie.
//!
//! ## Format
//! `<payload>.<signature>` where
//! - `payload` = base64url(JSON `{"uid": "<uuid>", "exp": <unix ms>}`), `exp`
//!   only present when a TTL is configured
//! - `signature` = base64url(HMAC-SHA256(secret, payload))
//!
//! Nothing is stored server-side. A token is valid iff its signature matches
//! and it has not expired.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    uid: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Signs and verifies session tokens with the configured secret
#[derive(Debug, Clone)]
pub struct SessionTokenService {
    config: Arc<AuthConfig>,
}

impl SessionTokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id`
    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// Verify a token and return the user it was issued to
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> AuthResult<String> {
        let exp = match self.config.token_ttl {
            Some(ttl) => {
                let expires_at = chrono::Duration::from_std(ttl)
                    .ok()
                    .and_then(|ttl| now.checked_add_signed(ttl))
                    .ok_or_else(|| {
                        AuthError::Internal(format!("Token TTL out of range: {ttl:?}"))
                    })?;
                Some(expires_at.timestamp_millis())
            }
            None => None,
        };

        let claims = Claims { uid: *user_id, exp };
        let json = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;

        let payload = to_base64url(&json);
        let signature = hmac_sha256(&self.config.token_secret, payload.as_bytes());

        Ok(format!("{}.{}", payload, to_base64url(&signature)))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let (payload, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

        let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

        if !verify_hmac_sha256(&self.config.token_secret, payload.as_bytes(), &signature) {
            return Err(AuthError::SessionInvalid);
        }

        // Signature is good from here on; failures below mean a key was reused
        // across incompatible formats.
        let json = from_base64url(payload).map_err(|_| AuthError::SessionInvalid)?;
        let claims: Claims =
            serde_json::from_slice(&json).map_err(|_| AuthError::SessionInvalid)?;

        if let Some(exp) = claims.exp {
            if now.timestamp_millis() >= exp {
                return Err(AuthError::SessionInvalid);
            }
        }

        Ok(claims.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(ttl: Option<Duration>) -> SessionTokenService {
        SessionTokenService::new(Arc::new(AuthConfig {
            token_ttl: ttl,
            ..AuthConfig::with_random_secret()
        }))
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service(None);
        let user_id = UserId::new();

        let token = tokens.issue(&user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_tokens_differ_per_user() {
        let tokens = service(None);
        let a = tokens.issue(&UserId::new()).unwrap();
        let b = tokens.issue(&UserId::new()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_other_secret_rejects() {
        let token = service(None).issue(&UserId::new()).unwrap();
        assert!(matches!(
            service(None).verify(&token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_forged_claim_rejects() {
        let tokens = service(None);
        let token = tokens.issue(&UserId::new()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let forged_claims = Claims {
            uid: UserId::new(),
            exp: None,
        };
        let forged_payload = to_base64url(&serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, signature);

        assert!(matches!(tokens.verify(&forged), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_malformed_and_truncated_reject() {
        let tokens = service(None);
        let token = tokens.issue(&UserId::new()).unwrap();

        for bad in [
            "",
            "no-dot-at-all",
            ".",
            &token[..token.len() - 4],
            &token[..token.find('.').unwrap()],
            &format!("{}.extra", token),
            "!!!.???",
        ] {
            assert!(
                matches!(tokens.verify(bad), Err(AuthError::SessionInvalid)),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_without_ttl_has_no_expiry() {
        let tokens = service(None);
        let user_id = UserId::new();
        let issued = Utc::now();
        let token = tokens.issue_at(&user_id, issued).unwrap();

        let far_future = issued + chrono::Duration::days(3650);
        assert_eq!(tokens.verify_at(&token, far_future).unwrap(), user_id);
    }

    #[test]
    fn test_expired_token_rejects() {
        let tokens = service(Some(Duration::from_secs(60)));
        let user_id = UserId::new();
        let issued = Utc::now();
        let token = tokens.issue_at(&user_id, issued).unwrap();

        let before = issued + chrono::Duration::seconds(59);
        assert_eq!(tokens.verify_at(&token, before).unwrap(), user_id);

        let after = issued + chrono::Duration::seconds(60);
        assert!(matches!(
            tokens.verify_at(&token, after),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let secs = (i64::MAX / 1_000_000) as u64;
        for ttl in [Duration::from_secs(secs), Duration::MAX] {
            let tokens = service(Some(ttl));
            assert!(matches!(
                tokens.issue(&UserId::new()),
                Err(AuthError::Internal(_))
            ));
        }
    }
}
