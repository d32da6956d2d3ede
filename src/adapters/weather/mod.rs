//! Weather Provider Adapters.
//!
//! - `OpenWeatherProvider` - OpenWeatherMap current-weather endpoint
//! - `MockWeatherProvider` - Configurable mock for testing

mod mock_provider;
mod openweather_provider;

pub use mock_provider::MockWeatherProvider;
pub use openweather_provider::{OpenWeatherConfig, OpenWeatherProvider};
