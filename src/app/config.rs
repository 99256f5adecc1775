//! Optional user settings loaded from `config.toml`.
//!
//! # config.toml Format
//!
//! ```toml
//! copy_feedback_ms = 2000
//! log_filter = "portfolio_prompt=debug,egui=warn"
//! theme = "Mocha"
//! ```
//!
//! Every key is optional. The file lives in the platform config directory
//! unless `PORTFOLIO_PROMPT_CONFIG` points somewhere else.

use super::dashui::ThemeChoice;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_PROMPT_CONFIG";

pub const DEFAULT_LOG_FILTER: &str =
    "portfolio_prompt=info,eframe=info,egui=warn,wgpu=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn,arboard=warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the copy button shows "Copied!"
    pub copy_feedback_ms: u64,
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins over this
    pub log_filter: String,
    /// Theme used when no theme has been saved yet
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 2000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            theme: ThemeChoice::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location. No config location, or no file there,
    /// yields defaults; an unreadable or malformed file is an error.
    pub fn try_load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::try_load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Like [`AppConfig::load_from_path`], but a missing file yields defaults.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// `PORTFOLIO_PROMPT_CONFIG` if set, else `<config_dir>/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        directories::ProjectDirs::from("com", "", "portfolio-prompt")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
