//! Query Router - keyword-routed conversational endpoint
//!
//! Each query is lower-cased and classified by keyword: "weather" goes to
//! OpenWeatherMap, "joke" to the official joke API, and everything else to a
//! Mistral chat completion. Every answered query is written to an audit log.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
