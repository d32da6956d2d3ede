//! Shared reqwest plumbing for the provider adapters.

use reqwest::Client;
use std::time::Duration;

use crate::ports::ProviderError;

/// Builds a client with the provider's request timeout applied.
pub(crate) fn build_client(
    provider: &'static str,
    timeout: Duration,
) -> Result<Client, ProviderError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        ProviderError::transport(provider, format!("Failed to create HTTP client: {}", e))
    })
}

/// Maps a failed send to a provider error.
pub(crate) fn send_error(
    provider: &'static str,
    timeout: Duration,
    err: reqwest::Error,
) -> ProviderError {
    if err.is_timeout() {
        timed_out(provider, timeout)
    } else if err.is_connect() {
        ProviderError::transport(provider, format!("Connection failed: {}", err))
    } else {
        ProviderError::transport(provider, err.to_string())
    }
}

/// Maps a failed body read or decode to a provider error.
///
/// The client timeout also covers reading the body, so a stalled body is a
/// timeout rather than a contract violation.
pub(crate) fn decode_error(
    provider: &'static str,
    timeout: Duration,
    err: reqwest::Error,
) -> ProviderError {
    if err.is_timeout() {
        timed_out(provider, timeout)
    } else {
        ProviderError::contract(provider, format!("Failed to parse response: {}", err))
    }
}

fn timed_out(provider: &'static str, timeout: Duration) -> ProviderError {
    ProviderError::Timeout {
        provider,
        timeout_secs: timeout.as_secs(),
    }
}
