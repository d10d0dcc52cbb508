//! # Controller Module
//!
//! Orchestrates one apply-level invocation against a [`SettingStore`].
//!
//! ```text
//! Start -> Fetched -> {Validated | InvalidInput} -> {Allowed | Declined} -> {Updated | UpdateFailed}
//! ```
//!
//! One read, at most one write, no retries.

use crate::store::SettingStore;
use seclevel_core::{GateError, Level, Outcome, Target, TransitionRequest};

/// The level gate bound to a remote store.
#[derive(Debug, Clone)]
pub struct LevelGate<S> {
    store: S,
    dry_run: bool,
}

impl<S: SettingStore + Sync> LevelGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Decide and report, but never write.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch and validate the current level.
    pub async fn current_level(&self) -> Result<Level, GateError> {
        let raw = self
            .store
            .read_setting()
            .await
            .map_err(|e| GateError::FetchError(e.to_string()))?
            .ok_or_else(|| GateError::FetchError("no value returned".to_string()))?;

        tracing::debug!(current = %raw, "fetched current level");
        Level::from_name(&raw).ok_or(GateError::InvalidCurrentLevel(raw))
    }

    /// Move the remote setting to `target` if the gate allows it.
    ///
    /// An unrecognized target is rejected unless `forced`, in which case it
    /// is written verbatim without an ordinal comparison.
    pub async fn apply_level(&self, target: &Target, forced: bool) -> Result<Outcome, GateError> {
        if target.level().is_none() && !forced {
            return Err(GateError::InvalidTargetLevel(target.to_string()));
        }

        let current = self.current_level().await?;

        if let Some(level) = target.level() {
            let request = TransitionRequest::new(current, level, forced);
            if !request.is_allowed() {
                tracing::info!(%current, attempted = %level, "transition declined");
                return Ok(Outcome::Declined {
                    current,
                    attempted: level,
                });
            }
            if forced && request.is_downgrade() {
                tracing::warn!(%current, target = %level, "forcing security level downgrade");
            }
        } else {
            tracing::warn!(%current, target = %target, "forcing unrecognized security level");
        }

        if self.dry_run {
            tracing::info!(%current, target = %target, "dry run, write skipped");
            return Ok(Outcome::Skipped {
                current,
                would_write: target.clone(),
            });
        }

        self.store
            .write_setting(target.as_str())
            .await
            .map_err(|e| GateError::UpdateError(e.to_string()))?;

        tracing::info!(from = %current, to = %target, "security level updated");
        Ok(Outcome::Updated {
            from: current,
            to: target.clone(),
        })
    }
}
