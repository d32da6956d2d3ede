//! Errors shared by every outbound provider port.

/// Outbound provider errors.
///
/// `Status` is the only variant a responder may recover from; the others mean
/// the provider could not be reached or answered with something unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Provider answered with a status other than the expected one.
    #[error("{provider} returned status {status}")]
    Status {
        provider: &'static str,
        status: u16,
    },

    /// Provider answered successfully but the body had the wrong shape.
    #[error("{provider} response did not match the expected shape: {message}")]
    Contract {
        provider: &'static str,
        message: String,
    },

    /// Request could not be sent or the connection dropped.
    #[error("{provider} request failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("{provider} request timed out after {timeout_secs}s")]
    Timeout {
        provider: &'static str,
        timeout_secs: u64,
    },
}

impl ProviderError {
    /// Creates a status error.
    pub fn status(provider: &'static str, status: u16) -> Self {
        Self::Status { provider, status }
    }

    /// Creates a contract violation error.
    pub fn contract(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Contract {
            provider,
            message: message.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that failed.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Status { provider, .. }
            | Self::Contract { provider, .. }
            | Self::Transport { provider, .. }
            | Self::Timeout { provider, .. } => provider,
        }
    }

    /// Returns the status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
