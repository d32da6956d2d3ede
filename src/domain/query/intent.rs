//! Intent classification.

use serde::Serialize;
use std::fmt;

use super::Query;

/// Substring that routes a query to the weather responder.
pub const WEATHER_KEYWORD: &str = "weather";

/// Substring that routes a query to the joke responder.
pub const JOKE_KEYWORD: &str = "joke";

/// The classified purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Current-weather lookup for a city.
    Weather,
    /// Random joke.
    Joke,
    /// Anything else, answered by the chat provider.
    Chat,
}

impl Intent {
    /// Classifies a query by keyword.
    ///
    /// "weather" is checked before "joke": a query containing both is a
    /// weather query. Everything else, including the empty query, is chat.
    pub fn classify(query: &Query) -> Self {
        if query.contains(WEATHER_KEYWORD) {
            Intent::Weather
        } else if query.contains(JOKE_KEYWORD) {
            Intent::Joke
        } else {
            Intent::Chat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Weather => "weather",
            Intent::Joke => "joke",
            Intent::Chat => "chat",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
