//! CLI command implementations

pub mod auth;
pub mod generate;
pub mod providers;
