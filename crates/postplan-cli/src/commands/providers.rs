//! The `providers` command - list the builtin registry

use anyhow::Result;

use postplan_core::ai::builtin_providers;
use postplan_core::CredentialStore;

pub fn run() -> Result<()> {
    let store = CredentialStore::load().unwrap_or_default();

    println!("Available providers:");
    for provider in builtin_providers() {
        let credential = if std::env::var(provider.id.env_key())
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
        {
            format!("key from {}", provider.id.env_key())
        } else if store.has_key(&provider.id) {
            "stored key".to_string()
        } else {
            "not configured".to_string()
        };

        println!(
            "  {:<8} {:<24} default model: {:<24} [{}]",
            provider.id.storage_key(),
            provider.description,
            provider.default_model,
            credential
        );
    }
    println!();
    println!("Configure a key with: postplan auth set <provider> <key>");
    Ok(())
}
