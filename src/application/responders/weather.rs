//! Weather responder.

use std::sync::Arc;

use crate::domain::query::WEATHER_APOLOGY;
use crate::ports::{ProviderError, WeatherProvider};

pub struct WeatherResponder {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherResponder {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Describes current conditions in `city`.
    ///
    /// A status error becomes [`WEATHER_APOLOGY`]; 4xx and 5xx are not told
    /// apart.
    pub async fn respond(&self, city: &str) -> Result<String, ProviderError> {
        match self.provider.current_weather(city).await {
            Ok(weather) => Ok(format!(
                "Current weather in {}: {}, {}°C.",
                city, weather.description, weather.temperature
            )),
            Err(ProviderError::Status { status, .. }) => {
                tracing::warn!(city, status, "Weather lookup failed, sending apology");
                Ok(WEATHER_APOLOGY.to_string())
            }
            Err(err) => Err(err),
        }
    }
}
