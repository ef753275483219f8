//! Local storage

pub mod credentials;

pub use credentials::{resolve_credential, CredentialStore};
