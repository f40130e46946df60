//! WeatherAPI.com client (<https://www.weatherapi.com>)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{ProviderConfig, ProviderError, WeatherProvider};
use crate::state::{WeatherData, CELSIUS};

/// `current.json` response, reduced to the fields the widget reads
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
    location: ResolvedLocation,
}

#[derive(Debug, Deserialize)]
struct Current {
    temp_c: f64,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ResolvedLocation {
    name: String,
}

impl From<CurrentResponse> for WeatherData {
    fn from(response: CurrentResponse) -> Self {
        WeatherData {
            temperature: response.current.temp_c,
            description: response.current.condition.text,
            location: response.location.name,
            unit: CELSIUS.to_string(),
        }
    }
}

/// Translate a raw `current.json` body into [`WeatherData`]
pub fn parse_current(body: &str) -> Result<WeatherData, ProviderError> {
    serde_json::from_str::<CurrentResponse>(body)
        .map(WeatherData::from)
        .map_err(|e| ProviderError::Parse(e.to_string()))
}

#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: ProviderConfig,
}

impl WeatherApiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn current_url(&self, api_key: &str, location: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(api_key),
            urlencoding::encode(location)
        )
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current(&self, location: &str) -> Result<WeatherData, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey)?;

        debug!(base_url = %self.config.base_url, "requesting current conditions");

        let response = self
            .client
            .get(self.current_url(api_key, location))
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        parse_current(&body)
    }
}
