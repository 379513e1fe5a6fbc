//! Configuration management for ReelView
//!
//! Handles config file loading/saving and API key resolution.
//! Config is stored at ~/.config/reelview/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundled TMDB API key used when nothing else is configured
const DEFAULT_API_KEY: &str = "597449be599eb19a7fcdd289a820a39c";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cached TMDB API key
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/reelview/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reelview").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the TMDB API key:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Cached key from the config file
    /// 3. Bundled default key (cached for the next launch)
    pub fn tmdb_api_key(&mut self) -> String {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                return key;
            }
        }

        if let Some(ref key) = self.tmdb_api_key {
            return key.clone();
        }

        self.tmdb_api_key = Some(DEFAULT_API_KEY.to_string());
        let _ = self.save(); // Best effort save
        DEFAULT_API_KEY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_has_no_cached_key() {
        let config = Config::default();
        assert!(config.tmdb_api_key.is_none());
    }

    #[test]
    fn test_cached_key_wins_over_bundled() {
        let mut config = Config {
            tmdb_api_key: Some("cached_key".to_string()),
        };
        // Only valid when TMDB_API_KEY is unset in the test environment
        if std::env::var("TMDB_API_KEY").is_err() {
            assert_eq!(config.tmdb_api_key(), "cached_key");
        }
    }

    #[test]
    fn test_bundled_key_is_well_formed() {
        let mut config = Config::default();
        if std::env::var("TMDB_API_KEY").is_err() {
            let key = config.tmdb_api_key();
            assert_eq!(key.len(), 32);
            assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
            // And it is now cached for the next launch
            assert_eq!(config.tmdb_api_key.as_deref(), Some(key.as_str()));
        }
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = Config {
            tmdb_api_key: Some("abc".to_string()),
        };
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.tmdb_api_key.as_deref(), Some("abc"));
    }
}
