//! Runtime settings.
//!
//! Settings are read from a JSON file. Without an explicit path the file is
//! looked up following the XDG Base Directory specification at
//! `$XDG_CONFIG_HOME/trestle/config.json` (usually
//! `~/.config/trestle/config.json`). A missing default file is not an error;
//! every field has a default.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ResultExt, TimelineError},
    sync::DEFAULT_COOLDOWN,
    timeline::DEFAULT_PALETTE,
};

/// File name looked up in the XDG config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Connection and session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL the `*_api.php` endpoints live under
    pub api_base_url: String,

    /// Schedule header whose tasks are loaded
    pub header_id: u64,

    /// Author recorded on tasks created by a split
    pub created_by: String,

    /// Window in which an identical update is not re-sent
    pub sync_cooldown_ms: u64,

    /// Lane colors, assigned in order of first appearance
    pub palette: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost".to_string(),
            header_id: 1,
            created_by: "admin".to_string(),
            sync_cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::FileSystem` if the file cannot be read and
    /// `TimelineError::Configuration` if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| TimelineError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Self = serde_json::from_str(&raw)
            .with_context(format!("Invalid settings file {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads `explicit` if given, otherwise the XDG config file if present,
    /// otherwise the defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be loaded is an error; so is a default
    /// file that exists but is invalid.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) => {
                log::debug!("Loading settings from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Existing config file in the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("trestle").find_config_file(CONFIG_FILE)
    }

    pub fn sync_cooldown(&self) -> Duration {
        Duration::from_millis(self.sync_cooldown_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(TimelineError::invalid_input("api_base_url").with_reason("must not be empty"));
        }
        Ok(())
    }
}
