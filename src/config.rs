use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum similarity for a candidate to count as a match
    pub cutoff: f64,
    /// Maximum number of matches returned
    pub limit: usize,
    /// Longest query/candidate (in chars) the matcher will score
    pub max_input_chars: usize,
    pub log_level: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cutoff: 0.6,
            limit: 5,
            max_input_chars: 256,
            log_level: "info".to_string(),
        }
    }
}

impl MatchConfig {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> SimResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file yields defaults. A file that fails to parse is moved
    /// aside to `*.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> SimResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> SimResult<()> {
        self.save_to(&config_path())
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> SimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(SimError::InvalidCutoff(self.cutoff));
        }
        if self.limit == 0 {
            return Err(SimError::Config("limit must be at least 1".to_string()));
        }
        if self.max_input_chars == 0 {
            return Err(SimError::Config(
                "max_input_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("simscore")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.cutoff, 0.6);
        assert_eq!(config.limit, 5);
        assert_eq!(config.max_input_chars, 256);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");

        let config = MatchConfig {
            cutoff: 0.75,
            limit: 3,
            ..MatchConfig::default()
        };
        config.save_to(&path).expect("Failed to save");

        let restored = MatchConfig::load_from(&path).expect("Failed to load");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = MatchConfig::load_from(&dir.path().join("config.json")).expect("load");
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "cutoff": 0.9 }"#).expect("write");

        let config = MatchConfig::load_from(&path).expect("load");
        assert_eq!(config.cutoff, 0.9);
        assert_eq!(config.limit, 5);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("write");

        let config = MatchConfig::load_from(&path).expect("load");
        assert_eq!(config, MatchConfig::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = MatchConfig {
            cutoff: 1.5,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidCutoff(_))));

        let config = MatchConfig {
            cutoff: f64::NAN,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidCutoff(_))));

        let config = MatchConfig {
            limit: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }
}
