//! Backend service configuration (env vars).
//!
//! The hosted backend is optional. Instead of a global client that may be
//! absent, callers receive a [`BackendConfig`] and match on it.

use std::{env, fmt};

pub const URL_VAR: &str = "PUBLIC_SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "PUBLIC_SUPABASE_ANON_KEY";

const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";
const PLACEHOLDER_KEY: &str = "placeholder-key";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend not configured (set PUBLIC_SUPABASE_URL and PUBLIC_SUPABASE_ANON_KEY)")]
    Unconfigured,
}

/// Public endpoint and anon key. The key is not a secret but is kept out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendCredentials {
    pub url: String,
    pub anon_key: String,
}

impl fmt::Debug for BackendCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendCredentials")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Configured(BackendCredentials),
    Unconfigured,
}

impl BackendConfig {
    /// Build from raw values. Missing or blank values fall back to
    /// placeholders, and any placeholder means unconfigured.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = non_blank(url).unwrap_or(PLACEHOLDER_URL);
        let anon_key = non_blank(anon_key).unwrap_or(PLACEHOLDER_KEY);
        if url.contains("placeholder") || anon_key.contains("placeholder") {
            return BackendConfig::Unconfigured;
        }
        BackendConfig::Configured(BackendCredentials {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Read `PUBLIC_SUPABASE_URL` and `PUBLIC_SUPABASE_ANON_KEY`.
    pub fn from_env() -> Self {
        let url = env::var(URL_VAR).ok();
        let key = env::var(ANON_KEY_VAR).ok();
        let cfg = Self::from_values(url.as_deref(), key.as_deref());
        tracing::info!(backend = %cfg, "backend configuration loaded");
        cfg
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, BackendConfig::Configured(_))
    }

    pub fn credentials(&self) -> Option<&BackendCredentials> {
        match self {
            BackendConfig::Configured(c) => Some(c),
            BackendConfig::Unconfigured => None,
        }
    }

    pub fn require(&self) -> Result<&BackendCredentials, ConfigError> {
        self.credentials().ok_or(ConfigError::Unconfigured)
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendConfig::Configured(c) => write!(f, "connected to {}", c.url),
            BackendConfig::Unconfigured => write!(f, "not configured"),
        }
    }
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
