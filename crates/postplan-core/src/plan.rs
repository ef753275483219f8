//! Plan generator
//!
//! Turns a request into an ordered list of post records, one per (day, slot)
//! pair, by calling the injected content source once per record. Calls are
//! strictly sequential and independent: no batching, no caching, no context
//! carried from one call to the next.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants;
use crate::source::{ContentItem, ContentSource};

/// Immutable input for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub topic: String,
    pub day_count: u32,
    pub posts_per_day: u32,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            topic: constants::planner::DEFAULT_TOPIC.to_string(),
            day_count: constants::planner::DEFAULT_DAY_COUNT,
            posts_per_day: constants::planner::DEFAULT_POSTS_PER_DAY,
        }
    }
}

/// One generated post, never mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// "Day 1", "Day 2", ...
    pub day_label: String,
    /// 1-based slot within the day
    pub slot_index: u32,
    pub content_type: String,
    pub hook_caption: String,
    pub engagement_prompt: String,
}

/// The full ordered plan for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub topic: String,
    /// Day-major then slot-minor; length = day_count * posts_per_day
    pub records: Vec<PostRecord>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Build the full plan by calling the source once per (day, slot) pair
///
/// A generation failure never aborts the run: the error text becomes a
/// placeholder record and the loop keeps going, so the plan always has its
/// full day_count * posts_per_day length. Zero counts produce an empty plan
/// with zero source calls.
pub async fn build_plan(request: &PlanRequest, source: &dyn ContentSource) -> Plan {
    let total = request.day_count as usize * request.posts_per_day as usize;
    info!(
        "Building plan for '{}': {} day(s) x {} post(s) via {}",
        request.topic,
        request.day_count,
        request.posts_per_day,
        source.name()
    );

    let mut records = Vec::with_capacity(total);
    for day in 1..=request.day_count {
        let day_label = format!("Day {day}");
        for slot in 1..=request.posts_per_day {
            let item = match source.generate(&request.topic).await {
                Ok(item) => item,
                Err(error) => {
                    warn!("{} slot {}: generation failed: {}", day_label, slot, error);
                    ContentItem::failure_notice(&error)
                }
            };
            records.push(PostRecord {
                day_label: day_label.clone(),
                slot_index: slot,
                content_type: item.content_type,
                hook_caption: item.hook_caption,
                engagement_prompt: item.engagement_prompt,
            });
        }
    }

    Plan {
        topic: request.topic.clone(),
        records,
    }
}
