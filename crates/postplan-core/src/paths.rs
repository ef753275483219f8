//! Filesystem locations for configuration and credentials

use std::path::PathBuf;

use crate::constants;

/// Configuration directory (`~/.postplan`)
///
/// Falls back to `./.postplan` when the home directory cannot be resolved.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(constants::ui::CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(constants::ui::CONFIG_DIR_NAME))
}

/// Path of the credential store file
pub fn credentials_path() -> PathBuf {
    config_dir().join("credentials.json")
}

/// Path of the CLI config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_dot_postplan() {
        assert!(config_dir().ends_with(".postplan"));
    }

    #[test]
    fn test_credentials_path_under_config_dir() {
        let path = credentials_path();
        assert!(path.starts_with(config_dir()));
        assert_eq!(path.file_name().unwrap(), "credentials.json");
    }
}
