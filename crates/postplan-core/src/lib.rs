//! Postplan Core - Shared library for the content-plan generator
//!
//! This crate provides everything behind the `postplan` CLI:
//! - Provider registry and chat-completions client
//! - Content sources (remote AI, local random fallback)
//! - Plan generation
//! - CSV and XLSX export
//! - Credential storage

pub mod ai;
pub mod constants;
pub mod export;
pub mod paths;
pub mod plan;
pub mod source;
pub mod storage;

// Re-exports for convenience
pub use ai::{AiClient, AiError, ProviderId};
pub use plan::{build_plan, Plan, PlanRequest, PostRecord};
pub use source::{select_source, ContentItem, ContentSource, CredentialPolicy};
pub use storage::{resolve_credential, CredentialStore};
