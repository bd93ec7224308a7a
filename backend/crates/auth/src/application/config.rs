//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only through `Arc`.

use std::time::Duration;

pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// Secret key for HMAC-signing session tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime; `None` issues tokens that never expire
    pub token_ttl: Option<Duration>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Avatar stored for users who register without uploading one
    pub default_avatar_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            token_secret: [0u8; 32],
            token_ttl: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            default_avatar_path: "/uploads/default_avatar.png".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie settings for the session token
    ///
    /// The cookie lives exactly as long as the token it carries.
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: self.token_ttl.map(|ttl| ttl.as_secs()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
