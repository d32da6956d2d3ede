//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `weather` - OpenWeatherMap client
//! - `joke` - Official joke API client
//! - `chat` - Mistral completions and the static help fallback
//! - `audit` - PostgreSQL and in-memory audit logs
//! - `http` - Axum routes and middleware

pub mod audit;
pub mod chat;
pub mod http;
pub mod joke;
pub(crate) mod outbound;
pub mod weather;

pub use audit::{InMemoryAuditLog, PostgresAuditLog};
pub use chat::{MistralConfig, MistralProvider, MockChatProvider, StaticHelpProvider};
pub use self::http::{build_router, QueryAppState};
pub use joke::{MockJokeProvider, OfficialJokeConfig, OfficialJokeProvider};
pub use weather::{MockWeatherProvider, OpenWeatherConfig, OpenWeatherProvider};
