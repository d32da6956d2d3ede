//! Weather Provider Port - current conditions for a city.

use async_trait::async_trait;

use super::ProviderError;

/// Current conditions as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Human-readable condition, e.g. "light rain".
    pub description: String,
    /// Temperature in degrees Celsius, kept as the provider's JSON number so
    /// integers and decimals render exactly as sent.
    pub temperature: serde_json::Number,
}

/// Port for current-weather lookups.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for `city`.
    ///
    /// # Errors
    ///
    /// `ProviderError::Status` for any response other than 200. A 200 with an
    /// unexpected body is `ProviderError::Contract`.
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError>;
}
