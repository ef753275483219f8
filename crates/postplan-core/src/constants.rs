//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Total request timeout - idea completions are short, one round trip
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
}

/// AI/LLM configuration
pub mod ai {
    /// Output budget for a single idea completion
    pub const MAX_IDEA_TOKENS: usize = 120;
}

/// Planner defaults and bounds
pub mod planner {
    /// Default topic when none is given
    pub const DEFAULT_TOPIC: &str = "AI";

    /// Default number of days in a plan
    pub const DEFAULT_DAY_COUNT: u32 = 5;

    /// Default posts per day
    pub const DEFAULT_POSTS_PER_DAY: u32 = 2;

    /// Upper bound on the day count control
    pub const MAX_DAY_COUNT: u32 = 100;

    /// Upper bound on the posts-per-day control
    pub const MAX_POSTS_PER_DAY: u32 = 10;

    /// Prefix for the hook/caption of a record whose generation failed
    pub const GENERATION_ERROR_PREFIX: &str = "Generation failed: ";
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".postplan";
}
