use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay: Duration::from_secs_f64(cfg.base_delay_secs.max(0.0)),
            max_delay: Duration::from_secs(cfg.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/sxs-meta/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SxsMetaConfig {
    /// Records API host, without the `/api/records/` suffix.
    pub base_url: String,
    /// Records requested per page.
    pub page_size: u32,
    /// Upper bound on pages followed through `links.next`.
    pub max_pages: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Optional personal access token, sent as a bearer token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for SxsMetaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://zenodo.org".to_string(),
            page_size: 1000,
            max_pages: 100,
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
            access_token: None,
            retry: None,
        }
    }
}

impl SxsMetaConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sxs-meta")
        .context("locate XDG config directory")?;
    let path = xdg_dirs.get_config_home().join("sxs-meta").join("config.toml");
    Ok(path)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The config file is optional: when its location cannot be resolved, built-in
/// defaults are used.
pub fn load_or_init() -> Result<SxsMetaConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("no config location, using defaults: {:#}", err);
            Ok(SxsMetaConfig::default())
        }
    }
}

/// Same as [`load_or_init`] for an explicit path.
///
/// A missing file is created with defaults when possible; failing to create it
/// only logs a warning. An existing file that cannot be read or parsed is an error.
pub fn load_or_init_at(path: &Path) -> Result<SxsMetaConfig> {
    if !path.exists() {
        let default_cfg = SxsMetaConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(err) => tracing::warn!("using default config: {:#}", err),
        }
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SxsMetaConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &SxsMetaConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
