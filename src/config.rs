//! Game configuration and tuning
//!
//! Everything the simulation needs to know about the world lives here, so a
//! run can be reproduced from a config plus a seed. All fields have defaults
//! matching the classic game; a JSON config only needs the fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (pixels per tick)
    pub speed: f32,
    /// Distance from the bottom of the surface to the player's top edge
    pub bottom_offset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            bottom_offset: PLAYER_BOTTOM_OFFSET,
        }
    }
}

/// Obstacle spawn tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Smallest obstacle edge (inclusive)
    pub min_size: f32,
    /// Largest obstacle edge (exclusive)
    pub max_size: f32,
    /// Upper bound (exclusive) of the random speed added at spawn
    pub extra_speed: f32,
    /// Speed added per elapsed tick at spawn
    pub speed_ramp: f32,
    /// How far below the surface an obstacle may fall before removal
    pub despawn_margin: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min_size: OBSTACLE_MIN_SIZE,
            max_size: OBSTACLE_MAX_SIZE,
            extra_speed: OBSTACLE_EXTRA_SPEED,
            speed_ramp: OBSTACLE_SPEED_RAMP,
            despawn_margin: DESPAWN_MARGIN,
        }
    }
}

/// Difficulty curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Initial chance to spawn an obstacle each tick
    pub spawn_rate: f32,
    /// Initial obstacle base fall speed
    pub base_speed: f32,
    /// Ticks between difficulty steps
    pub ramp_interval: u64,
    pub spawn_rate_step: f32,
    pub base_speed_step: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            spawn_rate: INITIAL_SPAWN_RATE,
            base_speed: INITIAL_BASE_SPEED,
            ramp_interval: RAMP_INTERVAL_TICKS,
            spawn_rate_step: SPAWN_RATE_STEP,
            base_speed_step: BASE_SPEED_STEP,
        }
    }
}

/// Purely cosmetic render options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Soft glow behind the player
    pub glow: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { glow: true }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface: SurfaceSize,
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    pub difficulty: DifficultyConfig,
    pub render: RenderOptions,
    /// Fixed simulation rate in Hz; `None` ticks once per displayed frame
    pub tick_rate: Option<f32>,
    /// RNG seed; `None` lets the platform pick one
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Default config for a surface of the given size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface: SurfaceSize { width, height },
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the preconditions the simulation relies on.
    ///
    /// A config that passes can never produce NaN positions or an empty
    /// spawn range.
    pub fn validate(&self) -> Result<()> {
        let SurfaceSize { width, height } = self.surface;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(GameError::InvalidSurface { width, height });
        }

        let player = &self.player;
        if !(player.width > 0.0 && player.height > 0.0) {
            return Err(invalid("player size must be positive"));
        }
        if player.width > width || player.height > height {
            return Err(invalid("player does not fit on the surface"));
        }
        if !(player.speed >= 0.0) {
            return Err(invalid("player speed must not be negative"));
        }

        let obstacles = &self.obstacles;
        if !(obstacles.min_size > 0.0 && obstacles.min_size < obstacles.max_size) {
            return Err(invalid("obstacle size range is empty"));
        }
        if obstacles.max_size >= width {
            return Err(invalid("obstacles must be narrower than the surface"));
        }
        if !(obstacles.extra_speed > 0.0) {
            return Err(invalid("obstacle extra speed range is empty"));
        }
        if !(obstacles.speed_ramp >= 0.0 && obstacles.despawn_margin >= 0.0) {
            return Err(invalid("obstacle ramp and despawn margin must not be negative"));
        }

        let difficulty = &self.difficulty;
        if !(0.0..=1.0).contains(&difficulty.spawn_rate) {
            return Err(invalid("spawn rate must be within [0, 1]"));
        }
        if difficulty.ramp_interval == 0 {
            return Err(invalid("ramp interval must be at least one tick"));
        }
        if !(difficulty.spawn_rate_step >= 0.0 && difficulty.base_speed_step >= 0.0) {
            return Err(invalid("difficulty steps must not be negative"));
        }

        if let Some(rate) = self.tick_rate {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(invalid("tick rate must be positive"));
            }
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.difficulty.spawn_rate, 0.02);
        assert_eq!(config.difficulty.base_speed, 2.5);
        assert_eq!(config.player.speed, 6.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "surface": { "width": 800 }, "seed": 7 }"#).unwrap();
        assert_eq!(config.surface.width, 800.0);
        assert_eq!(config.surface.height, SURFACE_HEIGHT);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.obstacles, ObstacleConfig::default());
        assert!(config.render.glow);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GameConfig::from_json("{ surface: ").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_zero_surface_rejected() {
        let config = GameConfig::with_surface(0.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidSurface { .. })
        ));

        let config = GameConfig::with_surface(f32::NAN, 600.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_surface_narrower_than_obstacles_rejected() {
        let config = GameConfig::with_surface(45.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let mut config = GameConfig::default();
        config.difficulty.ramp_interval = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.difficulty.spawn_rate = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.obstacles.min_size = 48.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tick_rate = Some(0.0);
        assert!(config.validate().is_err());
    }
}
