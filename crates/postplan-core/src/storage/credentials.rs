//! Provider credential storage
//!
//! Stores API keys for each provider in a JSON file under the config
//! directory, and resolves the effective credential for a run: process
//! environment first, stored key second.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ai::ProviderId;
use crate::paths;

/// Storage for API keys indexed by provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    /// API keys by provider storage key
    #[serde(flatten)]
    keys: HashMap<String, String>,
}

impl CredentialStore {
    fn path() -> PathBuf {
        paths::credentials_path()
    }

    /// Load credentials from disk (missing file is an empty store)
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load credentials from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let store: CredentialStore = serde_json::from_str(&contents)?;
        Ok(store)
    }

    /// Save credentials to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::path())
    }

    /// Save credentials to a specific path
    ///
    /// Uses the write-to-temp-file-then-rename pattern to prevent corruption.
    /// On Unix the file is restricted to 0600 before the rename.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&temp_path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut permissions = fs::metadata(&temp_path)?.permissions();
            permissions.set_mode(0o600);
            fs::set_permissions(&temp_path, permissions)
                .map_err(|e| anyhow::anyhow!("Failed to set secure file permissions: {}", e))?;
        }

        fs::rename(&temp_path, path)?;

        #[cfg(windows)]
        {
            tracing::warn!(
                "Windows: File permissions not set - credentials may be accessible to other users"
            );
        }

        tracing::debug!("Credentials saved atomically to {:?}", path);
        Ok(())
    }

    /// Get API key for a provider
    pub fn get(&self, provider: &ProviderId) -> Option<&String> {
        self.keys.get(provider.storage_key())
    }

    /// Set API key for a provider
    pub fn set(&mut self, provider: ProviderId, key: String) {
        self.keys.insert(provider.storage_key().to_string(), key);
    }

    /// Remove API key for a provider
    pub fn remove(&mut self, provider: &ProviderId) {
        self.keys.remove(provider.storage_key());
    }

    /// Check if a provider has a stored API key
    pub fn has_key(&self, provider: &ProviderId) -> bool {
        self.keys.contains_key(provider.storage_key())
    }

    /// Get all providers with stored API keys
    pub fn configured_providers(&self) -> Vec<ProviderId> {
        ProviderId::all()
            .iter()
            .filter(|p| self.has_key(p))
            .copied()
            .collect()
    }
}

/// Resolve the effective credential for a provider
///
/// Read once at startup: the process environment variable wins, the stored
/// key is the fallback. Blank values count as absent.
pub fn resolve_credential(provider: ProviderId, store: &CredentialStore) -> Option<String> {
    if let Ok(key) = std::env::var(provider.env_key()) {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }
    store
        .get(&provider)
        .filter(|key| !key.trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let mut store = CredentialStore::default();
        store.set(ProviderId::OpenAI, "sk-test-123".to_string());
        store.save_to_path(&path).unwrap();

        let loaded = CredentialStore::load_from_path(&path).unwrap();
        assert_eq!(loaded.get(&ProviderId::OpenAI).unwrap(), "sk-test-123");
        assert!(!loaded.has_key(&ProviderId::Groq));
        assert_eq!(loaded.configured_providers(), vec![ProviderId::OpenAI]);
    }

    #[test]
    fn test_missing_file_loads_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert!(store.configured_providers().is_empty());
    }

    #[test]
    fn test_remove_clears_key() {
        let mut store = CredentialStore::default();
        store.set(ProviderId::Groq, "gsk-abc".to_string());
        store.remove(&ProviderId::Groq);
        assert!(!store.has_key(&ProviderId::Groq));
    }

    #[test]
    fn test_blank_stored_key_counts_as_absent() {
        let mut store = CredentialStore::default();
        store.set(ProviderId::Groq, "   ".to_string());
        // Groq env var is not set in the test environment
        assert_eq!(resolve_credential(ProviderId::Groq, &store), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let mut store = CredentialStore::default();
        store.set(ProviderId::OpenAI, "sk-test".to_string());
        store.save_to_path(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
