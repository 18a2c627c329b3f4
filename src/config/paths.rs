//! Path management for xseal
//!
//! ## Path Resolution Order
//!
//! 1. `XSEAL_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/xseal` on Linux,
//!    `~/Library/Application Support/xseal` on macOS, `%APPDATA%\xseal` on
//!    Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SealError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "XSEAL_CONFIG_DIR";

/// Manages all paths used by xseal
#[derive(Debug, Clone)]
pub struct SealPaths {
    base_dir: PathBuf,
}

impl SealPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, SealError> {
        Self::resolve(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
    }

    fn resolve(override_dir: Option<PathBuf>) -> Result<Self, SealError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "xseal")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SealError::Config("Could not determine the config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SealError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().join("nested").join("xseal"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
