//! The `auth` subcommands - manage the credential store

use anyhow::Result;

use postplan_core::{CredentialStore, ProviderId};

/// Mask a key for display: first four chars, then dots
fn mask(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{visible}...")
}

pub fn set(provider: ProviderId, key: String) -> Result<()> {
    let mut store = CredentialStore::load()?;
    store.set(provider, key);
    store.save()?;
    println!("Stored API key for {provider}");
    Ok(())
}

pub fn show() -> Result<()> {
    let store = CredentialStore::load()?;
    let configured = store.configured_providers();
    if configured.is_empty() {
        println!("No API keys stored. Add one with: postplan auth set <provider> <key>");
        return Ok(());
    }
    println!("Stored API keys:");
    for provider in configured {
        if let Some(key) = store.get(&provider) {
            println!("  {:<10} {}", provider.storage_key(), mask(key));
        }
    }
    Ok(())
}

pub fn clear(provider: ProviderId) -> Result<()> {
    let mut store = CredentialStore::load()?;
    if !store.has_key(&provider) {
        println!("No stored API key for {provider}");
        return Ok(());
    }
    store.remove(&provider);
    store.save()?;
    println!("Removed API key for {provider}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_shows_only_prefix() {
        assert_eq!(mask("sk-abcdef123456"), "sk-a...");
        assert_eq!(mask("ab"), "ab...");
    }
}
