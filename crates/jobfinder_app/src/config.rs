//! Client configuration.
//!
//! Precedence, lowest first: built-in defaults, the RON config file,
//! `JOBFINDER_API_URL`, command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use finder_logging::finder_info;
use jobfinder_engine::{search_endpoint, SearchError, SearchSettings, DEFAULT_BASE_URL};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILENAME: &str = "jobfinder.ron";
pub const API_URL_ENV: &str = "JOBFINDER_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid api url: {0}")]
    InvalidApiUrl(#[from] SearchError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = SearchSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            max_response_bytes: settings.max_bytes,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `./jobfinder.ron` when no path is given.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        finder_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Applies environment overrides through `lookup` (normally `std::env::var`).
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.api_url {
            self.api_base_url = url.clone();
        }
        if let Some(secs) = cli.timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    /// Search client settings; fails early on an unusable base URL.
    pub fn search_settings(&self) -> Result<SearchSettings, ConfigError> {
        search_endpoint(&self.api_base_url)?;
        Ok(SearchSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_response_bytes,
        })
    }
}
