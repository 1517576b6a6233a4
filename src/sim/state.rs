//! Game state and core simulation types
//!
//! A single owned `GameState` holds everything a run needs, including its RNG,
//! so the updater, renderer and run controller only ever see it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::{DifficultyConfig, GameConfig};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Before the first start; a static frame is shown
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Player was hit; state is frozen for the final frame
    GameOver,
}

/// Something the shell may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A difficulty step was applied
    DifficultyRaised {
        level: u32,
        spawn_rate: f32,
        base_speed: f32,
    },
    /// The player collided with an obstacle
    RunEnded { score: u64 },
}

/// The player's sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels per tick)
    pub speed: f32,
}

impl Player {
    /// Spawn position: horizontally centered, a fixed offset above the bottom edge
    pub fn new(config: &GameConfig) -> Self {
        let p = &config.player;
        Self {
            pos: Vec2::new(
                config.surface.width / 2.0 - p.width / 2.0,
                config.surface.height - p.bottom_offset,
            ),
            size: Vec2::new(p.width, p.height),
            speed: p.speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Largest x that keeps the player fully on a surface of the given width
    pub fn max_x(&self, surface_width: f32) -> f32 {
        (surface_width - self.size.x).max(0.0)
    }

    /// Move horizontally by `dx` and clamp to the surface
    pub fn shift(&mut self, dx: f32, surface_width: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, self.max_x(surface_width));
    }
}

/// A falling square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed (pixels per tick)
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Fall by one tick
    #[inline]
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }
}

/// Difficulty counters, non-decreasing within a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Chance in [0, 1] to spawn an obstacle each tick
    pub spawn_rate: f32,
    /// Base fall speed of new obstacles
    pub base_speed: f32,
    /// Running ticks since the last start
    pub elapsed_ticks: u64,
    /// Number of difficulty steps applied
    pub level: u32,
}

impl Difficulty {
    pub fn new(config: &DifficultyConfig) -> Self {
        Self {
            spawn_rate: config.spawn_rate,
            base_speed: config.base_speed,
            elapsed_ticks: 0,
            level: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning this run was built from
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    /// RNG for spawn decisions
    pub rng: Pcg32,
    pub phase: RunPhase,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub difficulty: Difficulty,
    /// Running ticks survived since the last start
    pub score: u64,
    /// Score of the last finished run
    pub final_score: Option<u64>,
}

impl GameState {
    /// Create an idle game state.
    ///
    /// `config` is assumed to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            difficulty: Difficulty::new(&config.difficulty),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Idle,
            obstacles: Vec::new(),
            score: 0,
            final_score: None,
        }
    }

    /// Put every per-run value back to its initial state.
    ///
    /// The RNG stream continues so consecutive runs differ.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.difficulty = Difficulty::new(&self.config.difficulty);
        self.score = 0;
        self.final_score = None;
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// y beyond which obstacles are removed
    pub fn despawn_y(&self) -> f32 {
        self.config.surface.height + self.config.obstacles.despawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.difficulty.elapsed_ticks, 0);
    }

    #[test]
    fn test_player_spawn_position() {
        let config = GameConfig::with_surface(480.0, 640.0);
        let player = Player::new(&config);
        assert_eq!(player.pos, Vec2::new(220.0, 580.0));
        assert_eq!(player.size, Vec2::new(40.0, 20.0));
    }

    #[test]
    fn test_player_shift_clamps() {
        let config = GameConfig::with_surface(480.0, 640.0);
        let mut player = Player::new(&config);

        player.shift(-1000.0, 480.0);
        assert_eq!(player.pos.x, 0.0);

        player.shift(1000.0, 480.0);
        assert_eq!(player.pos.x, 440.0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.score = 99;
        state.final_score = Some(99);
        state.player.pos.x = 0.0;
        state.difficulty.spawn_rate = 0.5;
        state.difficulty.elapsed_ticks = 1000;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::splat(30.0),
            speed: 3.0,
        });

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.final_score, None);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.difficulty, Difficulty::new(&state.config.difficulty));
        assert_eq!(state.player, Player::new(&state.config));
    }
}
