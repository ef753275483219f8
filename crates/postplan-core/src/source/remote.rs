//! Remote AI content source
//!
//! Sends the fixed two-message planner prompt to a chat-completions endpoint
//! and parses the reply into the three idea fields.

use async_trait::async_trait;
use tracing::debug;

use super::{ContentItem, ContentSource};
use crate::ai::{AiClient, AiError};
use crate::constants;

/// Fixed system instruction for every idea request
pub const SYSTEM_PROMPT: &str = "You are a social media content planner AI.";

/// Content type used when the model reply cannot be split into fields
pub const DEFAULT_CONTENT_TYPE: &str = "General post";

/// Engagement prompt used when the model reply cannot be split into fields
pub const DEFAULT_ENGAGEMENT_PROMPT: &str =
    "What do you think? Share your thoughts in the comments!";

/// Content source backed by a hosted chat-completions model
pub struct RemoteAiSource {
    client: AiClient,
    model: String,
}

impl RemoteAiSource {
    pub fn new(client: AiClient, model: String) -> Self {
        Self { client, model }
    }

    fn user_message(topic: &str) -> String {
        format!(
            "Generate one content idea for {topic} with a content type, a hook/caption, \
             and an engagement prompt. Reply with exactly three lines labeled \
             'Content Type:', 'Hook/Caption:' and 'Engagement Prompt:'."
        )
    }
}

#[async_trait]
impl ContentSource for RemoteAiSource {
    fn name(&self) -> &'static str {
        "remote-ai"
    }

    async fn generate(&self, topic: &str) -> Result<ContentItem, AiError> {
        let reply = self
            .client
            .call_simple(
                &self.model,
                SYSTEM_PROMPT,
                &Self::user_message(topic),
                constants::ai::MAX_IDEA_TOKENS,
            )
            .await?;
        debug!("Model reply: {} chars", reply.len());
        Ok(parse_idea(&reply))
    }
}

/// Split a model reply into the three idea fields
///
/// Looks for the labeled lines the prompt asks for. When the model ignores
/// the labels, the whole reply becomes the hook/caption and fixed constants
/// fill the other two fields.
pub fn parse_idea(reply: &str) -> ContentItem {
    let mut content_type = None;
    let mut hook_caption = None;
    let mut engagement_prompt = None;

    for line in reply.lines() {
        let line = line.trim().trim_start_matches(['-', '*', ' ']);
        if let Some(rest) = strip_label(line, &["content type:"]) {
            content_type.get_or_insert_with(|| rest.to_string());
        } else if let Some(rest) = strip_label(line, &["hook/caption:", "hook:", "caption:"]) {
            hook_caption.get_or_insert_with(|| rest.to_string());
        } else if let Some(rest) = strip_label(line, &["engagement prompt:", "engagement:"]) {
            engagement_prompt.get_or_insert_with(|| rest.to_string());
        }
    }

    match (content_type, hook_caption, engagement_prompt) {
        (Some(content_type), Some(hook_caption), Some(engagement_prompt)) => ContentItem {
            content_type,
            hook_caption,
            engagement_prompt,
        },
        _ => ContentItem {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            hook_caption: reply.trim().to_string(),
            engagement_prompt: DEFAULT_ENGAGEMENT_PROMPT.to_string(),
        },
    }
}

/// Case-insensitive label strip; returns the text after the first matching label
///
/// Compares on the original bytes. Lowercasing the whole line first would
/// shift byte offsets for some Unicode chars and make the slice fall inside
/// a char boundary.
fn strip_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    for label in labels {
        let matches = line
            .get(..label.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label));
        if matches {
            return Some(line[label.len()..].trim_start_matches("**").trim());
        }
    }
    None
}
