//! # CLI Module
//!
//! Command-line surface for the security-level controller.
//!
//! Each command returns its status line as a `String` so the binary decides
//! where to print it and tests can inspect it directly.

use crate::client::CloudflareClient;
use crate::config::{Config, ConfigError, ConfigOverrides, SecretSource};
use crate::controller::LevelGate;
use crate::store::{SettingStore, StoreError};
use clap::Parser;
use seclevel_core::{GateError, Level, Target, DEFAULT_TARGET};
use thiserror::Error;

/// Manage the zone security level setting.
///
/// Raises the level only; lowering it requires --force.
#[derive(Debug, Clone, Parser)]
#[command(name = "seclevel", version, about, long_about = None)]
pub struct Cli {
    /// Target level: off, essentially_off, low, medium, high, under_attack
    #[arg(long = "security-level", default_value = DEFAULT_TARGET.as_str())]
    pub security_level: String,

    /// Skip the ordering check (allows lowering, or unlisted values)
    #[arg(long)]
    pub force: bool,

    /// Read and decide, but do not write
    #[arg(long)]
    pub dry_run: bool,

    /// Only print the current level
    #[arg(long, conflicts_with_all = ["force", "dry_run"])]
    pub show: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Zone identifier (falls back to CLOUDFLARE_ZONE_ID)
    #[arg(long)]
    pub zone_id: Option<String>,

    /// Account email (falls back to CLOUDFLARE_EMAIL)
    #[arg(long)]
    pub email: Option<String>,

    /// API base URL (falls back to CLOUDFLARE_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            zone_id: self.zone_id.clone(),
            email: self.email.clone(),
            api_base: self.api_base.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Errors surfaced to the process exit path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::Store(_) => "store_error",
            Self::Gate(e) => e.kind(),
            Self::Json(_) => "json_error",
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Resolve configuration, build the HTTP client and dispatch.
pub async fn run(cli: &Cli, secrets: &dyn SecretSource) -> Result<String, AppError> {
    let config = Config::resolve(cli.overrides(), secrets)?;
    tracing::debug!(?config, "configuration resolved");
    let client = CloudflareClient::from_config(&config)?;

    if cli.show {
        cmd_show(&client, cli.json).await
    } else {
        cmd_apply(client, &cli.security_level, cli.force, cli.dry_run, cli.json).await
    }
}

/// Apply `target` through the level gate and render the outcome.
pub async fn cmd_apply<S: SettingStore + Sync>(
    store: S,
    target: &str,
    force: bool,
    dry_run: bool,
    json: bool,
) -> Result<String, AppError> {
    let gate = LevelGate::new(store).with_dry_run(dry_run);
    let outcome = gate.apply_level(&Target::parse(target), force).await?;

    if json {
        Ok(serde_json::to_string(&outcome)?)
    } else {
        Ok(outcome.to_string())
    }
}

/// Read and render the current value without validating it.
pub async fn cmd_show<S: SettingStore + Sync>(store: &S, json: bool) -> Result<String, AppError> {
    let value = store
        .read_setting()
        .await
        .map_err(|e| GateError::FetchError(e.to_string()))?
        .ok_or_else(|| GateError::FetchError("no value returned".to_string()))?;
    let recognized = Level::from_name(&value).is_some();

    if json {
        Ok(serde_json::json!({ "current": value, "recognized": recognized }).to_string())
    } else if recognized {
        Ok(format!("Current security level: {value}"))
    } else {
        Ok(format!("Current security level: {value} (not a known level)"))
    }
}

/// One-line rendering of a failure.
pub fn render_error(err: &AppError, json: bool) -> String {
    if json {
        serde_json::json!({
            "outcome": "error",
            "kind": err.kind(),
            "message": err.to_string(),
        })
        .to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_low_unforced() {
        let cli = Cli::try_parse_from(["seclevel"]).unwrap();
        assert_eq!(cli.security_level, "low");
        assert!(!cli.force);
        assert!(!cli.dry_run);
        assert!(!cli.show);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "seclevel",
            "--security-level",
            "under_attack",
            "--force",
            "--json",
            "--zone-id",
            "z1",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.security_level, "under_attack");
        assert!(cli.force);
        assert!(cli.json);
        assert_eq!(cli.zone_id.as_deref(), Some("z1"));
        assert_eq!(cli.timeout_secs, Some(10));
    }

    #[test]
    fn show_conflicts_with_force() {
        let result = Cli::try_parse_from(["seclevel", "--show", "--force"]);
        assert!(result.is_err());
    }

    #[test]
    fn error_renders_as_json() {
        let err = AppError::from(GateError::InvalidCurrentLevel("weird".to_string()));
        let line = render_error(&err, true);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["outcome"], "error");
        assert_eq!(value["kind"], "invalid_current_level");
        assert_eq!(
            render_error(&err, false),
            "Current security level 'weird' is not valid"
        );
    }

    #[test]
    fn config_error_kind() {
        let err = AppError::from(ConfigError::Missing("CLOUDFLARE_API_KEY"));
        assert_eq!(err.kind(), "config_error");
        assert_eq!(err.to_string(), "Missing required setting CLOUDFLARE_API_KEY");
    }
}
