//! Engine configuration.
//!
//! Tunables are loaded from an optional `complaint-service.toml` file with
//! `COMPLAINT__`-prefixed environment variables layered on top, then
//! validated before use.

use anyhow::{Context, Result};
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Runtime tunables for the complaint engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many times the engine re-applies the history/narrative
    /// projections after the authoritative status write has landed.
    pub projection_retry_attempts: u32,

    /// Pause between projection re-application attempts, in milliseconds.
    pub projection_retry_backoff_ms: u64,

    /// Upper bound on the number of summaries returned by the list paths.
    pub list_page_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            projection_retry_attempts: 3,
            projection_retry_backoff_ms: 25,
            list_page_cap: 200,
        }
    }
}

impl EngineConfig {
    /// Load configuration from file and environment.
    ///
    /// The file path comes from `COMPLAINT_CONFIG` and falls back to
    /// `complaint-service.toml`; a missing file is not an error.
    pub fn load() -> Result<Self> {
        let path =
            env::var("COMPLAINT_CONFIG").unwrap_or_else(|_| "complaint-service.toml".to_string());

        let settings = config::Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("COMPLAINT").separator("__"))
            .build()
            .context("failed to read engine configuration sources")?;

        let cfg: Self = settings
            .try_deserialize()
            .context("failed to deserialize engine configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the engine cannot operate under.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.projection_retry_attempts >= 1,
            "projection_retry_attempts must be at least 1"
        );
        anyhow::ensure!(
            self.projection_retry_backoff_ms <= 5_000,
            "projection_retry_backoff_ms must not exceed 5000"
        );
        anyhow::ensure!(self.list_page_cap >= 1, "list_page_cap must be at least 1");
        Ok(())
    }

    #[must_use]
    pub fn projection_backoff(&self) -> Duration {
        Duration::from_millis(self.projection_retry_backoff_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.projection_retry_attempts, 3);
    }

    #[test]
    fn zero_retry_attempts_is_rejected() {
        let cfg = EngineConfig { projection_retry_attempts: 0, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
