//! Run lifecycle: Idle -> Running -> GameOver -> Running ...

use super::state::{GameEvent, GameState, RunPhase};

/// Reset every per-run value and begin running
pub fn start(state: &mut GameState) {
    state.reset();
    state.phase = RunPhase::Running;
    log::info!("Run started (seed {})", state.seed);
}

/// Start over; identical to [`start`], allowed from any phase
pub fn restart(state: &mut GameState) {
    let previous = state.phase;
    start(state);
    log::info!("Run restarted from {:?}", previous);
}

/// Stop the run after a collision.
///
/// Player and obstacles are left untouched so the last frame can still be
/// drawn; the score is recorded for display.
pub fn end_run(state: &mut GameState) -> GameEvent {
    state.phase = RunPhase::GameOver;
    state.final_score = Some(state.score);
    log::info!("Game over - score {}", state.score);
    GameEvent::RunEnded { score: state.score }
}
