//! Application Configuration
//!
//! Everything the server reads from the environment, parsed once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::SameSite;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// Ten years
const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` runs on in-memory stores
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let token_secret = match var("TOKEN_SECRET") {
            Some(b64) => decode_secret(&b64)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
                AuthConfig::with_random_secret().token_secret
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        let token_ttl = var("TOKEN_TTL_SECS")
            .map(|v| parse_token_ttl(&v))
            .transpose()?;

        let cookie_secure = match var("COOKIE_SECURE") {
            Some(v) => parse_bool(&v).context("COOKIE_SECURE must be true or false")?,
            None => !cfg!(debug_assertions),
        };

        let cookie_same_site = match var("COOKIE_SAME_SITE") {
            Some(v) => parse_same_site(&v)?,
            None => SameSite::default(),
        };
        // Browsers drop `SameSite=None` cookies that are not also `Secure`
        if cookie_same_site == SameSite::None && !cookie_secure {
            bail!("COOKIE_SAME_SITE=none requires COOKIE_SECURE=true");
        }

        let mut auth = AuthConfig {
            token_secret,
            token_ttl,
            cookie_secure,
            cookie_same_site,
            ..AuthConfig::default()
        };
        if let Some(path) = var("DEFAULT_AVATAR_PATH") {
            auth.default_avatar_path = path;
        }

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(v) => v.parse().context("MAX_UPLOAD_BYTES must be a number of bytes")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:5000")?;

        Ok(Self {
            database_url: var("DATABASE_URL"),
            database_max_connections,
            auth,
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./uploads")),
            max_upload_bytes,
            bind_addr,
        })
    }
}

fn decode_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(b64.trim())
        .context("TOKEN_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes (got {})", b.len()))
}

fn parse_token_ttl(v: &str) -> anyhow::Result<Duration> {
    let secs: u64 = v
        .trim()
        .parse()
        .context("TOKEN_TTL_SECS must be a number of seconds")?;

    if secs == 0 || secs > MAX_TOKEN_TTL_SECS {
        bail!(
            "TOKEN_TTL_SECS must be between 1 and {} (got {})",
            MAX_TOKEN_TTL_SECS,
            secs
        );
    }

    Ok(Duration::from_secs(secs))
}

fn parse_same_site(v: &str) -> anyhow::Result<SameSite> {
    match v.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(SameSite::Strict),
        "lax" => Ok(SameSite::Lax),
        "none" => Ok(SameSite::None),
        other => bail!("COOKIE_SAME_SITE must be strict, lax or none (got {})", other),
    }
}

fn parse_bool(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: {}", other),
    }
}
