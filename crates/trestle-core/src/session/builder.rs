//! Builder for creating and configuring schedule sessions.

use std::path::{Path, PathBuf};

use super::ScheduleSession;
use crate::{
    api::{HttpScheduleApi, ScheduleApi},
    config::Settings,
    error::Result,
};

/// Builder for creating and configuring [`ScheduleSession`] instances.
///
/// Explicit overrides win over the settings file, which wins over the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config_path: Option<PathBuf>,
    api_base_url: Option<String>,
    header_id: Option<u64>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom settings file.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/trestle/config.json` when it
    /// exists.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the API base URL.
    pub fn with_api_base_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.api_base_url = Some(url.into());
        }
        self
    }

    /// Overrides the schedule header.
    pub fn with_header_id(mut self, header_id: Option<u64>) -> Self {
        if header_id.is_some() {
            self.header_id = header_id;
        }
        self
    }

    /// Resolves the effective settings without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::FileSystem` or `TimelineError::Configuration`
    /// if the settings file cannot be loaded.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::resolve(self.config_path.as_deref())?;
        if let Some(url) = &self.api_base_url {
            settings.api_base_url.clone_from(url);
        }
        if let Some(header_id) = self.header_id {
            settings.header_id = header_id;
        }
        Ok(settings)
    }

    /// Builds a session over HTTP and loads the schedule.
    ///
    /// # Errors
    ///
    /// Returns settings errors, or the transport error if the schedule
    /// cannot be loaded.
    pub async fn build(self) -> Result<ScheduleSession<HttpScheduleApi>> {
        let settings = self.settings()?;
        let api = HttpScheduleApi::new(settings.api_base_url.clone());
        Self::open(api, settings).await
    }

    /// Builds a session over a caller-provided API and loads the schedule.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub async fn build_with_api<A: ScheduleApi>(self, api: A) -> Result<ScheduleSession<A>> {
        let settings = self.settings()?;
        Self::open(api, settings).await
    }

    async fn open<A: ScheduleApi>(api: A, settings: Settings) -> Result<ScheduleSession<A>> {
        let mut session = ScheduleSession::new(api, settings);
        session.load().await?;
        Ok(session)
    }
}
