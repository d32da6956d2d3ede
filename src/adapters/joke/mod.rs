//! Joke Provider Adapters.
//!
//! - `OfficialJokeProvider` - Official Joke API (`/random_joke`)
//! - `MockJokeProvider` - Configurable mock for testing

mod mock_provider;
mod official_joke_provider;

pub use mock_provider::MockJokeProvider;
pub use official_joke_provider::{OfficialJokeConfig, OfficialJokeProvider};
