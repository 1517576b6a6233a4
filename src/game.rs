//! Frame loop
//!
//! `GameLoop` exclusively owns the game state, the held-key tracker and the
//! frame clock. Whatever drives frames (requestAnimationFrame, a timer, a
//! test) calls [`GameLoop::run_frame`] once per frame.

use crate::clock::FrameClock;
use crate::config::GameConfig;
use crate::error::Result;
use crate::hud;
use crate::platform::InputEvent;
use crate::renderer::{self, Surface};
use crate::sim::{self, GameEvent, GameState, InputTracker, KeyBindings, RunPhase};

pub struct GameLoop {
    state: GameState,
    input: InputTracker,
    bindings: KeyBindings,
    clock: FrameClock,
}

impl GameLoop {
    /// Build an idle game loop; fails if the config would break the simulation
    pub fn new(config: GameConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected config: {}", e);
            return Err(e);
        }

        let seed = config.seed.unwrap_or_default();
        let clock = FrameClock::new(config.tick_rate);
        log::info!(
            "Game loop ready: {}x{} surface, seed {}, {:?}",
            config.surface.width,
            config.surface.height,
            seed,
            clock
        );

        Ok(Self {
            state: GameState::new(config, seed),
            input: InputTracker::new(),
            bindings: KeyBindings::default(),
            clock,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tooling and tests (e.g. forcing the spawn rate)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Whether a key drives an action (shells use this to suppress scrolling)
    pub fn is_bound(&self, key: &str) -> bool {
        self.bindings.action_for(key).is_some()
    }

    /// Begin a fresh run
    pub fn start(&mut self) {
        self.input.release_all();
        self.clock.reset();
        sim::start(&mut self.state);
    }

    /// Begin a fresh run from any phase
    pub fn restart(&mut self) {
        self.input.release_all();
        self.clock.reset();
        sim::restart(&mut self.state);
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        event.apply(&mut self.input);
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Advance the simulation for a frame that took `dt` seconds
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let ticks = self.clock.ticks_for_frame(dt);
        let mut events = Vec::new();
        for _ in 0..ticks {
            if !self.state.is_running() {
                break;
            }
            let input = self.input.snapshot(&self.bindings);
            events.extend(sim::tick(&mut self.state, &input));
        }
        events
    }

    /// Draw the current state
    pub fn render(&self, surface: &mut impl Surface) {
        renderer::render(surface, &self.state, &self.state.config.render);
    }

    /// Update then render; the single per-frame entry point
    pub fn run_frame(&mut self, surface: &mut impl Surface, dt: f32) -> Vec<GameEvent> {
        let events = self.update(dt);
        self.render(surface);
        events
    }

    /// Final-score message once a run has ended
    pub fn game_over_message(&self) -> Option<String> {
        match (self.state.phase, self.state.final_score) {
            (RunPhase::GameOver, Some(score)) => Some(hud::game_over_message(score)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexBatch;
    use crate::sim::Obstacle;
    use glam::Vec2;

    fn quiet_loop() -> GameLoop {
        let mut game = GameLoop::new(GameConfig::default()).unwrap();
        game.start();
        game.state_mut().difficulty.spawn_rate = 0.0;
        game
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(GameLoop::new(GameConfig::with_surface(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_idle_frame_draws_without_ticking() {
        let mut game = GameLoop::new(GameConfig::default()).unwrap();
        let mut batch = VertexBatch::new(480.0, 640.0);

        let events = game.run_frame(&mut batch, 1.0 / 60.0);

        assert!(events.is_empty());
        assert_eq!(game.phase(), RunPhase::Idle);
        assert_eq!(game.state().score, 0);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_held_key_moves_player() {
        let mut game = quiet_loop();
        let mut batch = VertexBatch::new(480.0, 640.0);
        let x0 = game.state().player.pos.x;

        game.key_down("ArrowLeft");
        game.run_frame(&mut batch, 1.0 / 60.0);
        game.run_frame(&mut batch, 1.0 / 60.0);
        game.key_up("ArrowLeft");
        game.run_frame(&mut batch, 1.0 / 60.0);

        assert_eq!(game.state().player.pos.x, x0 - 12.0);
        assert_eq!(game.state().score, 3);
    }

    #[test]
    fn test_restart_clears_held_keys() {
        let mut game = quiet_loop();
        game.handle_input(&InputEvent::KeyDown("d".into()));
        game.restart();
        game.state_mut().difficulty.spawn_rate = 0.0;
        let x0 = game.state().player.pos.x;

        game.update(1.0 / 60.0);

        assert_eq!(game.state().player.pos.x, x0);
    }

    #[test]
    fn test_game_over_message() {
        let mut game = quiet_loop();
        assert_eq!(game.game_over_message(), None);

        for _ in 0..5 {
            game.update(1.0 / 60.0);
        }
        let p = game.state().player.pos;
        game.state_mut().obstacles.push(Obstacle {
            pos: p,
            size: Vec2::splat(30.0),
            speed: 0.0,
        });
        let events = game.update(1.0 / 60.0);

        assert_eq!(events, vec![GameEvent::RunEnded { score: 5 }]);
        assert_eq!(
            game.game_over_message().as_deref(),
            Some("Game Over\nScore: 5")
        );
    }

    #[test]
    fn test_fixed_rate_stops_ticking_after_game_over() {
        let config = GameConfig {
            tick_rate: Some(1000.0),
            ..GameConfig::default()
        };
        let mut game = GameLoop::new(config).unwrap();
        game.start();
        game.state_mut().difficulty.spawn_rate = 0.0;
        let p = game.state().player.pos;
        game.state_mut().obstacles.push(Obstacle {
            pos: p,
            size: Vec2::splat(30.0),
            speed: 0.0,
        });

        let events = game.update(0.1);

        assert_eq!(events.len(), 1);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.phase(), RunPhase::GameOver);
    }

    #[test]
    fn test_default_bindings() {
        let game = GameLoop::new(GameConfig::default()).unwrap();
        assert!(game.is_bound("ArrowLeft"));
        assert!(game.is_bound("d"));
        assert!(!game.is_bound("Enter"));
    }
}
