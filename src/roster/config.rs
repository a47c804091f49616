//! TibiaData connection settings read from the environment.
use std::{env, time::Duration};

use reqwest::Url;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.tibiadata.com";
const DEFAULT_API_VERSION: &str = "v4";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// TibiaData API configuration sourced from the environment.
#[derive(Debug, Clone)]
pub struct TibiaDataConfig {
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl Default for TibiaDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TibiaDataConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank or invalid values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = value("TIBIADATA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_version = value("TIBIADATA_API_VERSION")
            .map(|value| value.trim_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let timeout = value("TIBIADATA_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            base_url,
            api_version,
            timeout,
        }
    }

    /// Builds `{base}/{version}/{resource}/{name}` with `name` encoded as one path segment.
    pub fn resource_url(&self, resource: &str, name: &str) -> Result<Url, TibiaDataConfigError> {
        let mut url = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|err| TibiaDataConfigError::InvalidBaseUrl(err.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| TibiaDataConfigError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend([self.api_version.as_str(), resource, name]);

        Ok(url)
    }
}

#[derive(Debug, Error)]
pub enum TibiaDataConfigError {
    #[error("invalid TibiaData base url: {0}")]
    InvalidBaseUrl(String),
    #[error("client build failure: {0}")]
    ClientBuild(String),
}
