//! Content Source abstraction
//!
//! A Content Source produces one social-media content idea per call, either
//! from a remote chat-completions model or a local fixed-vocabulary
//! randomizer. The source is chosen once at startup and injected into the
//! plan generator; nothing re-checks the credential inside the generation
//! loop.

mod local;
mod remote;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::{get_provider, AiClient, AiError, ProviderId};
use crate::constants;

pub use local::{
    content_type_options, engagement_prompt_options, hook_caption_options, LocalRandomSource,
};
pub use remote::{
    parse_idea, RemoteAiSource, DEFAULT_CONTENT_TYPE, DEFAULT_ENGAGEMENT_PROMPT, SYSTEM_PROMPT,
};

/// One generated social-media content idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Post format, e.g. "Carousel" or "Short-form video"
    pub content_type: String,
    /// The hook/caption text
    pub hook_caption: String,
    /// Call to action for the audience
    pub engagement_prompt: String,
}

impl ContentItem {
    /// Placeholder item for a failed generation
    ///
    /// The failure text lands in `hook_caption` because that is the column
    /// users read; the run keeps going.
    pub fn failure_notice(error: &AiError) -> Self {
        Self {
            content_type: "N/A".to_string(),
            hook_caption: format!("{}{}", constants::planner::GENERATION_ERROR_PREFIX, error),
            engagement_prompt: String::new(),
        }
    }
}

/// Produces one content idea per call
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logs and the CLI header
    fn name(&self) -> &'static str;

    /// Generate one idea about `topic`
    async fn generate(&self, topic: &str) -> Result<ContentItem, AiError>;
}

/// What to do when no provider credential is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialPolicy {
    /// Degrade to the local random source (logged at warn)
    #[default]
    FallbackToLocal,
    /// Refuse to run without a credential
    Required,
}

/// Select the content source for this run
///
/// A non-empty credential selects the remote AI source; otherwise the policy
/// decides between the local fallback and a hard error. The decision is made
/// once, before the generation loop starts.
pub fn select_source(
    provider: ProviderId,
    model: &str,
    credential: Option<String>,
    policy: CredentialPolicy,
) -> Result<Box<dyn ContentSource>> {
    match credential.filter(|key| !key.trim().is_empty()) {
        Some(key) => {
            info!("Using remote AI source: {} / {}", provider, model);
            let client = AiClient::new(get_provider(provider), key);
            Ok(Box::new(RemoteAiSource::new(client, model.to_string())))
        }
        None => match policy {
            CredentialPolicy::FallbackToLocal => {
                warn!(
                    "No credential for {} ({} unset, no stored key); using local random source",
                    provider,
                    provider.env_key()
                );
                Ok(Box::new(LocalRandomSource::new()))
            }
            CredentialPolicy::Required => anyhow::bail!(
                "no API key configured for {} - set {} or run `postplan auth set {} <key>`",
                provider,
                provider.env_key(),
                provider.storage_key()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notice_carries_error_text() {
        let item = ContentItem::failure_notice(&AiError::EmptyCompletion);
        assert!(item
            .hook_caption
            .starts_with(constants::planner::GENERATION_ERROR_PREFIX));
        assert!(item.hook_caption.contains("empty completion"));
    }

    #[test]
    fn test_select_source_blank_credential_falls_back() {
        let source = select_source(
            ProviderId::OpenAI,
            "gpt-4o-mini",
            Some("   ".to_string()),
            CredentialPolicy::FallbackToLocal,
        )
        .unwrap();
        assert_eq!(source.name(), "local-random");
    }

    #[test]
    fn test_select_source_missing_credential_required_fails() {
        let result = select_source(
            ProviderId::Groq,
            "llama-3.1-8b-instant",
            None,
            CredentialPolicy::Required,
        );
        let err = result.err().expect("required policy must fail");
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_select_source_with_credential_is_remote() {
        let source = select_source(
            ProviderId::OpenAI,
            "gpt-4o-mini",
            Some("sk-test".to_string()),
            CredentialPolicy::Required,
        )
        .unwrap();
        assert_eq!(source.name(), "remote-ai");
    }
}
