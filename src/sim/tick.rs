//! Per-frame simulation tick
//!
//! Advances the game state by one simulated frame: movement, spawning,
//! obstacle fall, collision, difficulty and score, in that order.

use glam::Vec2;
use rand::Rng;

use super::control::end_run;
use super::input::TickInput;
use super::state::{GameEvent, GameState, Obstacle, RunPhase};

/// Advance the game state by one tick.
///
/// Inert unless the run is `Running`. A tick that detects a collision stops
/// right after the transition to `GameOver`, so the final score only counts
/// completed ticks.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<GameEvent> {
    if state.phase != RunPhase::Running {
        return None;
    }

    // Player movement (both directions may cancel out)
    let mut dx = 0.0;
    if input.left {
        dx -= state.player.speed;
    }
    if input.right {
        dx += state.player.speed;
    }
    state.player.shift(dx, state.config.surface.width);

    // Random spawn
    if state.rng.random::<f32>() < state.difficulty.spawn_rate {
        let obstacle = spawn_obstacle(state);
        log::trace!(
            "Spawned obstacle at x={:.1} size={:.1} speed={:.2}",
            obstacle.pos.x,
            obstacle.size.x,
            obstacle.speed
        );
        state.obstacles.push(obstacle);
    }

    // Fall, dropping anything that left the surface
    let despawn_y = state.despawn_y();
    state.obstacles.retain_mut(|obstacle| {
        obstacle.advance();
        obstacle.pos.y <= despawn_y
    });

    // Collisions
    let player = state.player.rect();
    if state.obstacles.iter().any(|o| o.rect().overlaps(&player)) {
        return Some(end_run(state));
    }

    let event = escalate_difficulty(state);

    state.score += 1;

    event
}

/// Create a new obstacle just above the visible area.
///
/// Size is uniform in `[min_size, max_size)`, x is uniform over the positions
/// that keep it fully on the surface, and fall speed grows with elapsed time.
pub fn spawn_obstacle(state: &mut GameState) -> Obstacle {
    let tuning = state.config.obstacles;
    let width = state.config.surface.width;

    let size = state.rng.random_range(tuning.min_size..tuning.max_size);
    let x = state.rng.random_range(0.0..width - size);
    let speed = state.difficulty.base_speed
        + state.rng.random_range(0.0..tuning.extra_speed)
        + tuning.speed_ramp * state.difficulty.elapsed_ticks as f32;

    Obstacle {
        pos: Vec2::new(x, -size),
        size: Vec2::splat(size),
        speed,
    }
}

/// Count the tick and apply a difficulty step on every ramp interval
fn escalate_difficulty(state: &mut GameState) -> Option<GameEvent> {
    let curve = state.config.difficulty;
    let difficulty = &mut state.difficulty;

    difficulty.elapsed_ticks += 1;
    if !difficulty.elapsed_ticks.is_multiple_of(curve.ramp_interval) {
        return None;
    }

    difficulty.spawn_rate += curve.spawn_rate_step;
    difficulty.base_speed += curve.base_speed_step;
    difficulty.level += 1;

    log::debug!(
        "Difficulty {}: spawn_rate={:.3} base_speed={:.2}",
        difficulty.level,
        difficulty.spawn_rate,
        difficulty.base_speed
    );

    Some(GameEvent::DifficultyRaised {
        level: difficulty.level,
        spawn_rate: difficulty.spawn_rate,
        base_speed: difficulty.base_speed,
    })
}
