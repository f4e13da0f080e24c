//! Playfield geometry configuration
//!
//! Supplied once at engine construction and immutable for the session.
//! Loadable from JSON; invalid or missing files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;

/// Immutable per-session playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Playfield width
    pub width: f32,
    /// Playfield height (floor line to top edge)
    pub height: f32,
    /// Basket width
    pub basket_width: f32,
    /// Basket height
    pub basket_height: f32,
    /// Gap between the floor line and the basket's bottom edge
    pub basket_floor_offset: f32,
    /// Egg width (the egg sprite is slightly taller, but collision uses width)
    pub egg_size: f32,
    /// Distance from the top edge down to the egg spawn height
    pub egg_spawn_margin: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            basket_width: BASKET_WIDTH,
            basket_height: BASKET_HEIGHT,
            basket_floor_offset: BASKET_FLOOR_OFFSET,
            egg_size: EGG_SIZE,
            egg_spawn_margin: EGG_SPAWN_MARGIN,
        }
    }
}

impl PlayfieldConfig {
    /// Height above the floor line at which eggs spawn
    pub fn egg_spawn_y(&self) -> f32 {
        self.height - self.egg_spawn_margin
    }

    /// Top of the catch zone above the floor line
    pub fn basket_top(&self) -> f32 {
        self.basket_height + self.basket_floor_offset
    }

    /// Rightmost allowed basket left-edge position
    pub fn max_basket_x(&self) -> f32 {
        self.width - self.basket_width
    }

    /// Rightmost allowed egg left-edge position
    pub fn max_egg_x(&self) -> f32 {
        self.width - self.egg_size
    }

    /// Whether the geometry admits a playable session
    pub fn is_valid(&self) -> bool {
        self.width > self.basket_width
            && self.width > self.egg_size
            && self.egg_spawn_y() > self.basket_top() + self.egg_size / 2.0
            && [
                self.width,
                self.height,
                self.basket_width,
                self.basket_height,
                self.basket_floor_offset,
                self.egg_size,
                self.egg_spawn_margin,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Load configuration from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(config) if config.is_valid() => {
                    log::info!("Loaded playfield config from {}", path.display());
                    config
                }
                Ok(_) => {
                    log::warn!(
                        "Playfield config in {} is not playable, using defaults",
                        path.display()
                    );
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No playfield config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlayfieldConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.egg_spawn_y(), 720.0);
        assert_eq!(config.basket_top(), 70.0);
        assert_eq!(config.max_basket_x(), 310.0);
        assert_eq!(config.max_egg_x(), 360.0);
    }

    #[test]
    fn test_degenerate_config_rejected() {
        // Basket wider than the playfield
        let config = PlayfieldConfig {
            width: 80.0,
            ..Default::default()
        };
        assert!(!config.is_valid());

        // Spawn height inside the catch zone
        let config = PlayfieldConfig {
            height: 100.0,
            ..Default::default()
        };
        assert!(!config.is_valid());

        let config = PlayfieldConfig {
            egg_size: f32::NAN,
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = PlayfieldConfig::load("/nonexistent/playfield.json");
        assert_eq!(config, PlayfieldConfig::default());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PlayfieldConfig {
            width: 600.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PlayfieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PlayfieldConfig = serde_json::from_str(r#"{"width": 500.0}"#).unwrap();
        assert_eq!(config.width, 500.0);
        assert_eq!(config.basket_width, BASKET_WIDTH);
    }
}
