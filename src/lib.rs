//! Dodgefall - A falling-block dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, difficulty)
//! - `renderer`: Drawing surface abstraction and WebGPU pipeline
//! - `game`: Frame loop tying input, simulation and rendering together
//! - `platform`: Browser/native input adapter
//! - `config`: Data-driven game tuning

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::GameLoop;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface size (used when no canvas size is known)
    pub const SURFACE_WIDTH: f32 = 480.0;
    pub const SURFACE_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Horizontal speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Distance from the bottom edge of the surface to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;

    /// Obstacle size range [min, max)
    pub const OBSTACLE_MIN_SIZE: f32 = 28.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 48.0;
    /// Random extra fall speed range [0, max)
    pub const OBSTACLE_EXTRA_SPEED: f32 = 1.5;
    /// Fall speed added per elapsed tick at spawn time
    pub const OBSTACLE_SPEED_RAMP: f32 = 0.002;
    /// Obstacles are removed once they fall this far below the surface
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Difficulty defaults
    pub const INITIAL_SPAWN_RATE: f32 = 0.02;
    pub const INITIAL_BASE_SPEED: f32 = 2.5;
    /// Ticks between difficulty steps (4 seconds at 60 Hz)
    pub const RAMP_INTERVAL_TICKS: u64 = 240;
    pub const SPAWN_RATE_STEP: f32 = 0.005;
    pub const BASE_SPEED_STEP: f32 = 0.25;

    /// Fixed-timestep clock: maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame times longer than this are clamped (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
