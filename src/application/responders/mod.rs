//! Responders - turn a classified query into display text.
//!
//! Each responder wraps exactly one provider port. The weather and joke
//! responders absorb non-200 statuses into a fixed apology; every other
//! provider failure is returned to the caller.

mod chat;
mod joke;
mod weather;

pub use chat::ChatResponder;
pub use joke::JokeResponder;
pub use weather::WeatherResponder;
