//! Query module - normalization, intent classification, city extraction.
//!
//! Everything here is pure: no I/O, no clock, no randomness. The request
//! handler composes these functions with the provider ports.

mod city;
mod intent;
mod replies;
mod user_query;

pub use city::{extract_city, remove_special_characters, DEFAULT_CITY};
pub use intent::{Intent, JOKE_KEYWORD, WEATHER_KEYWORD};
pub use replies::{HELP_TEXT, JOKE_APOLOGY, WEATHER_APOLOGY};
pub use user_query::Query;
