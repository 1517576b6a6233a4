//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per simulated frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use control::{end_run, restart, start};
pub use input::{Action, InputTracker, KeyBindings, TickInput};
pub use state::{Difficulty, GameEvent, GameState, Obstacle, Player, RunPhase};
pub use tick::{spawn_obstacle, tick};
