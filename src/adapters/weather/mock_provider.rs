//! Mock Weather Provider for testing.
//!
//! Responses are consumed in order; once the queue is empty every call
//! returns a fixed clear-sky report. Requested cities are recorded.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{CurrentWeather, ProviderError, WeatherProvider};

/// Mock weather provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider {
    responses: Arc<Mutex<VecDeque<Result<CurrentWeather, ProviderError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful report.
    pub fn with_report(
        self,
        description: impl Into<String>,
        temperature: impl Into<serde_json::Number>,
    ) -> Self {
        self.push(Ok(CurrentWeather {
            description: description.into(),
            temperature: temperature.into(),
        }))
    }

    /// Queues an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.push(Err(error))
    }

    /// Cities requested so far, in order.
    pub fn cities(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn push(self, response: Result<CurrentWeather, ProviderError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        self.calls.lock().unwrap().push(city.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(CurrentWeather {
                    description: "clear sky".to_string(),
                    temperature: 20.into(),
                })
            })
    }
}
