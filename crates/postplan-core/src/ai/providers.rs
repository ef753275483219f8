//! AI provider configuration
//!
//! Defines provider types, configurations, and the built-in provider registry
//! for OpenAI-compatible chat-completion endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Unique identifier for each supported provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    // serde would split this into "open_a_i"; keep the storage key spelling
    #[default]
    #[serde(rename = "openai")]
    OpenAI,
    Groq,
}

impl ProviderId {
    /// Get all available provider IDs (default first)
    pub fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenAI, ProviderId::Groq]
    }

    /// Get the storage key for this provider (used in credentials.json)
    pub fn storage_key(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Groq => "groq",
        }
    }

    /// Environment variable consulted before the credential store
    pub fn env_key(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "OPENAI_API_KEY",
            ProviderId::Groq => "GROQ_API_KEY",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::OpenAI => write!(f, "OpenAI"),
            ProviderId::Groq => write!(f, "Groq"),
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::all()
            .iter()
            .find(|p| p.storage_key().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown provider '{s}' (expected: openai, groq)"))
    }
}

/// Configuration for an AI provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Unique identifier
    pub id: ProviderId,
    /// Display name
    pub name: String,
    /// Short description for listings
    pub description: String,
    /// Chat-completions endpoint URL
    pub base_url: String,
    /// Model used when none is configured
    pub default_model: String,
}

/// Lazily initialized built-in provider configurations
static BUILTIN_PROVIDERS: LazyLock<Vec<ProviderConfig>> = LazyLock::new(|| {
    vec![
        // OpenAI - the default provider
        ProviderConfig {
            id: ProviderId::OpenAI,
            name: "OpenAI".to_string(),
            description: "GPT models via the standard chat-completions API".to_string(),
            base_url: "https://api.openai.com/v1/chat/completions".to_string(),
            default_model: "gpt-4o-mini".to_string(),
        },
        // Groq - hosted open-weights chat models, OpenAI-compatible endpoint
        ProviderConfig {
            id: ProviderId::Groq,
            name: "Groq".to_string(),
            description: "Hosted open-weights models (Llama family)".to_string(),
            base_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            default_model: "llama-3.1-8b-instant".to_string(),
        },
    ]
});

/// Get all built-in provider configurations (cached, no allocation)
pub fn builtin_providers() -> &'static [ProviderConfig] {
    &BUILTIN_PROVIDERS
}

/// Get a specific provider configuration by ID
pub fn get_provider(id: ProviderId) -> &'static ProviderConfig {
    BUILTIN_PROVIDERS
        .iter()
        .find(|p| p.id == id)
        .expect("builtin registry covers every ProviderId")
}
