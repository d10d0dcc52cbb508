//! # Config Module
//!
//! Runtime configuration and credential resolution.
//!
//! Credentials are resolved once at startup from CLI overrides and an
//! injected [`SecretSource`], then passed into the client constructor.
//! Error messages name the missing variable, never a value.
//! `Debug` output redacts secrets.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Public endpoint of the zone settings API.
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Per-request timeout applied to the read and the write.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required value was neither passed as a flag nor found in the secret source.
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    /// Timeout must be at least one second.
    #[error("Timeout must be greater than zero seconds")]
    InvalidTimeout,
}

// =============================================================================
// SECRET SOURCE
// =============================================================================

/// Where named secrets come from.
pub trait SecretSource {
    /// Raw value of the named secret, if present.
    fn secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn secret(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl SecretSource for BTreeMap<String, String> {
    fn secret(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Trimmed value, or `None` if absent or blank.
fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required(
    flag: Option<String>,
    secrets: &dyn SecretSource,
    name: &'static str,
) -> Result<String, ConfigError> {
    non_blank(flag)
        .or_else(|| non_blank(secrets.secret(name)))
        .ok_or(ConfigError::Missing(name))
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Account credentials for the zone settings API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub zone_id: String,
    pub email: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("zone_id", &self.zone_id)
            .field("email", &"<REDACTED>")
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Values supplied on the command line. `None` falls back to the secret source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub zone_id: Option<String>,
    pub email: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl Config {
    /// Resolve configuration, flags first, then the secret source.
    pub fn resolve(
        overrides: ConfigOverrides,
        secrets: &dyn SecretSource,
    ) -> Result<Self, ConfigError> {
        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let credentials = Credentials {
            zone_id: required(overrides.zone_id, secrets, ENV_ZONE_ID)?,
            email: required(overrides.email, secrets, ENV_EMAIL)?,
            api_key: required(None, secrets, ENV_API_KEY)?,
        };

        let api_base = non_blank(overrides.api_base)
            .or_else(|| non_blank(secrets.secret(ENV_API_BASE)))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            credentials,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
