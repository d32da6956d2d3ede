//! Fixed reply texts returned when a provider cannot produce an answer.

/// Returned by the weather responder on any non-200 provider status.
pub const WEATHER_APOLOGY: &str = "Sorry, I couldn't retrieve the weather for that location.";

/// Returned by the joke responder on any non-200 provider status.
pub const JOKE_APOLOGY: &str = "Sorry, I couldn't fetch a joke at the moment.";

/// Chat reply when no language model is configured, or when one answers
/// with nothing.
pub const HELP_TEXT: &str =
    "I can fetch weather data and tell jokes. Try asking about the weather or a joke!";
