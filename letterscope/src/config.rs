//! Validated runtime configuration
//!
//! [`crate::cli::Args`] is parsed by clap and turned into a [`Config`] by
//! `Args::to_config()`, which is where invalid values are rejected.

use std::time::Duration;

use letterscope_common::Category;
use reqwest::Url;

use crate::domain::ConfigError;
use crate::session::Settings;

/// Default counting service location
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const VOWELS_PATH: &str = "analyzeVowels";
const CONSONANTS_PATH: &str = "analyzeConsonants";

/// Where and how to reach the counting service
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL, always ending in `/` so endpoint paths append to it
    pub base_url: Url,
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Parse and validate the server URL.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidServerUrl`] for unparsable or non-HTTP URLs
    /// and [`ConfigError::InvalidTimeout`] for a zero timeout.
    pub fn new(server: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerUrl {
            url: server.to_string(),
            reason,
        };

        let mut base_url = Url::parse(server).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme \"{}\"", base_url.scheme())));
        }
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self { base_url, timeout })
    }

    /// Endpoint URL for one category
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidServerUrl`] if the path cannot be joined.
    pub fn endpoint(&self, category: Category) -> Result<Url, ConfigError> {
        let path = match category {
            Category::Vowels => VOWELS_PATH,
            Category::Consonants => CONSONANTS_PATH,
        };
        self.base_url.join(path).map_err(|e| ConfigError::InvalidServerUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Complete validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub remote: RemoteConfig,
    /// Initial toggles (category, source, zero display)
    pub settings: Settings,
}
