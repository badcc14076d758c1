//! # Engine Configuration
//!
//! Tunables for sequence allocation and regeneration.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SKU_MAX_ATTEMPTS=1000                                              │
//! │     SKU_MAX_REGENERATIONS=5                                            │
//! │     SKU_MIN_SEQUENCE=1000 / SKU_MAX_SEQUENCE=9999                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/titan-pos/sku.toml (Linux)                               │
//! │     ~/Library/Application Support/com.titan.pos/sku.toml (macOS)       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # sku.toml
//! [allocator]
//! max_attempts = 1000
//! min_sequence = 1000
//! max_sequence = 9999
//!
//! [generator]
//! max_regenerations = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};

/// Largest value that fits the 4-digit sequence segment.
pub const MAX_SEQUENCE_VALUE: u16 = 9999;

// =============================================================================
// Allocator Settings
// =============================================================================

/// Sequence allocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorSettings {
    /// Random draws before falling back to the clock.
    /// Default: 1000
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Smallest sequence number drawn (inclusive).
    /// Default: 1000
    #[serde(default = "default_min_sequence")]
    pub min_sequence: u16,

    /// Largest sequence number drawn (inclusive).
    /// Default: 9999
    #[serde(default = "default_max_sequence")]
    pub max_sequence: u16,
}

fn default_max_attempts() -> u32 {
    1000
}

fn default_min_sequence() -> u16 {
    1000
}

fn default_max_sequence() -> u16 {
    MAX_SEQUENCE_VALUE
}

impl AllocatorSettings {
    /// Rejects settings that could draw an empty range or a sequence wider
    /// than four digits.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_attempts == 0 {
            return Err(EngineError::InvalidConfig(
                "max_attempts must be greater than 0".into(),
            ));
        }

        if self.max_sequence > MAX_SEQUENCE_VALUE {
            return Err(EngineError::InvalidConfig(format!(
                "max_sequence must be at most {}, got {}",
                MAX_SEQUENCE_VALUE, self.max_sequence
            )));
        }

        if self.min_sequence > self.max_sequence {
            return Err(EngineError::InvalidConfig(format!(
                "min_sequence ({}) must not exceed max_sequence ({})",
                self.min_sequence, self.max_sequence
            )));
        }

        Ok(())
    }
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        AllocatorSettings {
            max_attempts: default_max_attempts(),
            min_sequence: default_min_sequence(),
            max_sequence: default_max_sequence(),
        }
    }
}

// =============================================================================
// Generator Settings
// =============================================================================

/// Settings for the final collision check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// How many times a finished SKU that turns out to be taken is
    /// regenerated before giving up.
    /// Default: 5
    #[serde(default = "default_max_regenerations")]
    pub max_regenerations: u32,
}

fn default_max_regenerations() -> u32 {
    5
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            max_regenerations: default_max_regenerations(),
        }
    }
}

// =============================================================================
// Main Engine Configuration
// =============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub allocator: AllocatorSettings,

    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl EngineConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (sku.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> EngineResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading SKU engine config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load SKU engine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> EngineResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| EngineError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "SKU engine config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        self.allocator.validate()
    }

    /// Applies overrides from a variable lookup (the environment in
    /// [`load`](Self::load)). Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_override::<u32>(&lookup, "SKU_MAX_ATTEMPTS") {
            debug!(max_attempts = v, "Overriding max attempts from environment");
            self.allocator.max_attempts = v;
        }

        if let Some(v) = parse_override::<u16>(&lookup, "SKU_MIN_SEQUENCE") {
            self.allocator.min_sequence = v;
        }

        if let Some(v) = parse_override::<u16>(&lookup, "SKU_MAX_SEQUENCE") {
            self.allocator.max_sequence = v;
        }

        if let Some(v) = parse_override::<u32>(&lookup, "SKU_MAX_REGENERATIONS") {
            debug!(max_regenerations = v, "Overriding max regenerations from environment");
            self.generator.max_regenerations = v;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "titan", "pos")
            .map(|dirs| dirs.config_dir().join("sku.toml"))
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key = %key, value = %raw, "Ignoring unparseable override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.allocator.max_attempts, 1000);
        assert_eq!(config.allocator.min_sequence, 1000);
        assert_eq!(config.allocator.max_sequence, 9999);
        assert_eq!(config.generator.max_regenerations, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = EngineConfig::default();
        config.allocator.max_attempts = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.allocator.max_sequence = 10_000;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.allocator.min_sequence = 5000;
        config.allocator.max_sequence = 4000;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.allocator.min_sequence = 0;
        config.allocator.max_sequence = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str("[allocator]\nmax_attempts = 10\n").unwrap();
        assert_eq!(config.allocator.max_attempts, 10);
        assert_eq!(config.allocator.min_sequence, 1000);
        assert_eq!(config.generator, GeneratorSettings::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SKU_MAX_ATTEMPTS", "25"),
            ("SKU_MAX_REGENERATIONS", "not-a-number"),
            ("SKU_MIN_SEQUENCE", " 2000 "),
        ]
        .into_iter()
        .collect();

        let mut config = EngineConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.allocator.max_attempts, 25);
        assert_eq!(config.allocator.min_sequence, 2000);
        assert_eq!(config.allocator.max_sequence, 9999);
        assert_eq!(config.generator.max_regenerations, 5);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sku.toml");

        let mut config = EngineConfig::default();
        config.allocator.max_attempts = 42;
        config.generator.max_regenerations = 1;
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[allocator]"));
        assert!(contents.contains("[generator]"));

        let loaded: EngineConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sku.toml");
        std::fs::write(&path, "[allocator]\nmax_attempts = \"many\"\n").unwrap();

        assert!(EngineConfig::load(Some(path.clone())).is_err());
        let config = EngineConfig::load_or_default(Some(path));
        assert_eq!(config.allocator, AllocatorSettings::default());
    }
}
