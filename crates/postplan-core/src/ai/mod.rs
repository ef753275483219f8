//! Provider registry and chat-completions client

pub mod client;
pub mod providers;

pub use client::{AiClient, AiError};
pub use providers::{builtin_providers, get_provider, ProviderConfig, ProviderId};
