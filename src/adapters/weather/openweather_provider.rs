//! OpenWeatherMap Provider - Implementation of WeatherProvider.
//!
//! Issues `GET {base_url}?q={city}&appid={key}&units=metric` and reads
//! `weather[0].description` and `main.temp` from the body.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::adapters::outbound::{build_client, decode_error, send_error};
use crate::ports::{CurrentWeather, ProviderError, WeatherProvider};

const PROVIDER: &str = "openweathermap";

/// Configuration for the OpenWeatherMap provider.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API key sent as `appid`.
    api_key: Secret<String>,
    /// Current-weather endpoint.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "http://api.openweathermap.org/data/2.5/weather".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the endpoint URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenWeatherMap API provider implementation.
pub struct OpenWeatherProvider {
    config: OpenWeatherConfig,
    client: Client,
}

impl OpenWeatherProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ProviderError> {
        let client = build_client(PROVIDER, config.timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        tracing::debug!(city, "Fetching weather");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("q", city), ("appid", self.config.api_key()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, self.config.timeout, e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Weather API responded");
        if status != StatusCode::OK {
            return Err(ProviderError::status(PROVIDER, status.as_u16()));
        }

        let body: OpenWeatherResponse = response
            .json()
            .await
            .map_err(|e| decode_error(PROVIDER, self.config.timeout, e))?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::contract(PROVIDER, "No weather conditions in response"))?;

        Ok(CurrentWeather {
            description: condition.description,
            temperature: body.main.temp,
        })
    }
}

// ----- OpenWeatherMap API Types -----

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    weather: Vec<OpenWeatherCondition>,
    main: OpenWeatherMain,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: serde_json::Number,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        let config = OpenWeatherConfig::new("owm-key")
            .with_base_url(format!("{}/data/2.5/weather", server.uri()))
            .with_timeout(Duration::from_secs(5));
        OpenWeatherProvider::new(config).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = OpenWeatherConfig::new("test-key")
            .with_base_url("https://weather.example.com")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.base_url, "https://weather.example.com");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.api_key(), "test-key");
    }

    #[tokio::test]
    async fn sends_city_key_and_metric_units() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "paris"))
            .and(query_param("appid", "owm-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
                "main": {"temp": 21.5, "humidity": 40}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let weather = provider_for(&server).await.current_weather("paris").await.unwrap();

        assert_eq!(weather.description, "clear sky");
        assert_eq!(weather.temperature.to_string(), "21.5");
    }

    #[tokio::test]
    async fn integer_temperature_keeps_its_form() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{"description": "mist"}],
                "main": {"temp": 7}
            })))
            .mount(&server)
            .await;

        let weather = provider_for(&server).await.current_weather("oslo").await.unwrap();
        assert_eq!(weather.temperature.to_string(), "7");
    }

    #[tokio::test]
    async fn non_200_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "cod": "404", "message": "city not found"
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .await
            .current_weather("atlantis")
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::status(PROVIDER, 404));
    }

    #[tokio::test]
    async fn missing_fields_are_a_contract_violation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"main": {"temp": 3}})))
            .mount(&server)
            .await;

        let err = provider_for(&server).await.current_weather("rome").await.unwrap_err();
        assert!(matches!(err, ProviderError::Contract { .. }));
    }

    #[tokio::test]
    async fn empty_conditions_are_a_contract_violation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [],
                "main": {"temp": 3}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).await.current_weather("rome").await.unwrap_err();
        assert!(matches!(err, ProviderError::Contract { .. }));
    }
}
