//! Weather provider boundary
//!
//! The widget only knows [`WeatherProvider`] and [`WeatherData`]. Each
//! concrete provider owns the translation from its JSON vocabulary into
//! `WeatherData`, so another service can be swapped in without touching the
//! reducer or the components.

pub mod weatherapi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::WeatherData;

pub use weatherapi::WeatherApiClient;

/// Why a provider call failed. Only logged; the UI shows a single message.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API credential was configured
    #[error("missing weather API key")]
    MissingApiKey,

    /// Transport-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Request(String),

    /// Provider answered with a non-success status
    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Parse(String),
}

/// Provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API base URL without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential; never shown to the user or logged
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Source of current conditions for a place name
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for an already trimmed location query
    async fn current(&self, location: &str) -> Result<WeatherData, ProviderError>;
}
