//! Chat Provider Adapters.
//!
//! Implementations of the ChatProvider port.
//!
//! ## Available Adapters
//!
//! - `MistralProvider` - Mistral chat completions (OpenAI-compatible wire format)
//! - `StaticHelpProvider` - Fixed help text, no outbound call
//! - `MockChatProvider` - Configurable mock for testing

mod mistral_provider;
mod mock_provider;
mod static_help_provider;

pub use mistral_provider::{MistralConfig, MistralProvider};
pub use mock_provider::MockChatProvider;
pub use static_help_provider::StaticHelpProvider;
