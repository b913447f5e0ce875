use crate::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_END_REACHED_THRESHOLD: f32 = 0.2;
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// User configuration read from `config.toml`.
///
/// Every field is optional; the `effective_*` accessors apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
    /// Fraction of the visible length from the end at which the next page is requested.
    #[serde(default)]
    pub end_reached_threshold: Option<f32>,
    /// Logical pixels per terminal cell, used by the grid breakpoints.
    #[serde(default)]
    pub cell_width_px: Option<u16>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/roster/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("roster/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("roster\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> RosterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> RosterResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RosterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RosterResult<()> {
        if let Some(threshold) = self.end_reached_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(RosterError::Config(format!(
                    "end_reached_threshold must be within 0.0..=1.0, got {}",
                    threshold
                )));
            }
        }
        if self.cell_width_px == Some(0) {
            return Err(RosterError::Config("cell_width_px must be positive".into()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(RosterError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }

    pub fn effective_end_reached_threshold(&self) -> f32 {
        self.end_reached_threshold
            .unwrap_or(DEFAULT_END_REACHED_THRESHOLD)
    }

    pub fn effective_cell_width_px(&self) -> u16 {
        self.cell_width_px.unwrap_or(DEFAULT_CELL_WIDTH_PX)
    }

    pub fn effective_request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
