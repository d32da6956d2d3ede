//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the routing logic and the outside world. Adapters implement these ports.
//!
//! ## Provider Ports
//!
//! - `WeatherProvider` - Current conditions for a city
//! - `JokeProvider` - A random joke
//! - `ChatProvider` - Language-model chat completion
//!
//! ## Storage Ports
//!
//! - `AuditLog` - Single-record insert of the interaction audit trail

mod audit_log;
mod chat_provider;
mod joke_provider;
mod provider_error;
mod weather_provider;

pub use audit_log::{AuditLog, AuditLogError};
pub use chat_provider::{
    ChatCompletion, ChatProvider, ChatRequest, Message, MessageRole, ProviderInfo,
};
pub use joke_provider::{Joke, JokeProvider};
pub use provider_error::ProviderError;
pub use weather_provider::{CurrentWeather, WeatherProvider};
