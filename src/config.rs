//! Game configuration
//!
//! Fixed at construction. Loaded from JSON by the native binary; every field
//! falls back to the classic layout (5 bugs, 3 gems, 5x6 board).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimError};
use crate::sim::GridGeometry;

/// Construction-time game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of enemies on the board (may be zero)
    pub enemy_count: usize,
    /// Number of gems kept on the lanes
    pub collectible_count: usize,
    /// Selectable character names, in menu order
    pub skins: Vec<String>,
    /// Board dimensions
    pub grid: GridGeometry,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_count: 5,
            collectible_count: 3,
            skins: [
                "The boy",
                "The cat girl",
                "The horn girl",
                "The pink girl",
                "The princess",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            grid: GridGeometry::default(),
        }
    }
}

impl GameConfig {
    pub fn skin_count(&self) -> usize {
        self.skins.len()
    }

    /// Check that a game can be built from this configuration
    pub fn validate(&self) -> Result<(), SimError> {
        let grid = &self.grid;
        if grid.columns < 1 {
            return Err(SimError::InvalidConfiguration(format!(
                "board needs at least 1 column, got {}",
                grid.columns
            )));
        }
        // Water, three lanes, and at least one safe row below them
        if grid.rows < 5 {
            return Err(SimError::InvalidConfiguration(format!(
                "board needs at least 5 rows, got {}",
                grid.rows
            )));
        }
        if self.collectible_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "collectible_count must be positive".into(),
            ));
        }
        if self.collectible_count > grid.lane_capacity() {
            return Err(SimError::InvalidConfiguration(format!(
                "{} collectibles do not fit in {} lane cells",
                self.collectible_count,
                grid.lane_capacity()
            )));
        }
        if self.skins.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "at least one skin is required".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {}: {} enemies, {} gems",
            path.display(),
            config.enemy_count,
            config.collectible_count
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.skin_count(), 5);
        assert_eq!(config.enemy_count, 5);
        assert_eq!(config.collectible_count, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "enemy_count": 2 }"#).unwrap();
        assert_eq!(config.enemy_count, 2);
        assert_eq!(config.collectible_count, 3);
        assert_eq!(config.grid, GridGeometry::default());
    }

    #[test]
    fn test_zero_enemies_allowed() {
        let config = GameConfig {
            enemy_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_many_collectibles_rejected() {
        let err = GameConfig::from_json(r#"{ "collectible_count": 16 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let no_gems = GameConfig {
            collectible_count: 0,
            ..Default::default()
        };
        assert!(no_gems.validate().is_err());

        let no_skins = GameConfig {
            skins: Vec::new(),
            ..Default::default()
        };
        assert!(no_skins.validate().is_err());

        let short_board = GameConfig {
            grid: GridGeometry::new(5, 4),
            ..Default::default()
        };
        assert!(short_board.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
