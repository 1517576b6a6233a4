//! Dodgefall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use dodgefall::platform::InputEvent;
    use dodgefall::renderer::{RenderState, VertexBatch};
    use dodgefall::sim::{GameEvent, RunPhase};
    use dodgefall::{GameConfig, GameError, GameLoop, hud};

    const CANVAS_ID: &str = "gameCanvas";
    const SCORE_ID: &str = "score";
    const PLAY_BTN_ID: &str = "playBtn";
    const RESTART_BTN_ID: &str = "restartBtn";
    const OVERLAY_ID: &str = "gameOverlay";
    const OVERLAY_TEXT_ID: &str = "overlayText";
    const OVERLAY_RESTART_ID: &str = "overlayRestart";

    /// Game instance holding all state
    struct Game {
        game: GameLoop,
        batch: VertexBatch,
        render_state: Option<RenderState>,
        last_time: f64,
        last_score: Option<u64>,
    }

    impl Game {
        fn new(game: GameLoop) -> Self {
            let surface = game.state().config.surface;
            Self {
                game,
                batch: VertexBatch::new(surface.width, surface.height),
                render_state: None,
                last_time: 0.0,
                last_score: None,
            }
        }

        /// Update, draw and refresh the page for one animation frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let events = self.game.run_frame(&mut self.batch, dt);
            self.present();
            self.update_hud(&events);
        }

        /// Push the current vertex batch to the GPU
        fn present(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update score and end-of-run overlay in the DOM
        fn update_hud(&mut self, events: &[GameEvent]) {
            let Some(document) = document() else {
                return;
            };

            let score = self.game.state().score;
            if self.last_score != Some(score) {
                if let Some(el) = document.get_element_by_id(SCORE_ID) {
                    el.set_text_content(Some(&hud::score_text(score)));
                }
                self.last_score = Some(score);
            }

            for event in events {
                if let GameEvent::RunEnded { score } = event {
                    if let Some(el) = document.get_element_by_id(OVERLAY_TEXT_ID) {
                        el.set_inner_html(&hud::game_over_html(*score));
                    }
                    set_visible(&document, OVERLAY_ID, true);
                    set_visible(&document, RESTART_BTN_ID, true);
                }
            }
        }

        fn start(&mut self) {
            self.game.start();
            show_running_ui();
        }

        fn restart(&mut self) {
            self.game.restart();
            show_running_ui();
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    }

    fn show_running_ui() {
        if let Some(document) = document() {
            set_visible(&document, PLAY_BTN_ID, false);
            set_visible(&document, RESTART_BTN_ID, false);
            set_visible(&document, OVERLAY_ID, false);
        }
    }

    /// Surface size comes from the canvas; everything else from `data-config`
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let mut config = match canvas.get_attribute("data-config") {
            Some(json) => GameConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring data-config: {}", e);
                GameConfig::default()
            }),
            None => GameConfig::default(),
        };
        config.surface.width = canvas.width() as f32;
        config.surface.height = canvas.height() as f32;
        config.seed.get_or_insert(js_sys::Date::now() as u64);
        config
    }

    async fn init_renderer(canvas: &HtmlCanvasElement) -> Result<RenderState, GameError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, canvas.width(), canvas.height()).await
    }

    pub async fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Dodgefall starting...");

        let Some(canvas) = document()
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #{} canvas found", CANVAS_ID);
            return Ok(());
        };

        let config = load_config(&canvas);
        let game = Rc::new(RefCell::new(Game::new(GameLoop::new(config)?)));

        let render_state = init_renderer(&canvas).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_buttons(game.clone());

        // Static first frame; ticking starts when the player presses Play
        request_animation_frame(game);

        log::info!("Dodgefall running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(input) = InputEvent::from_keyboard(&event) else {
                    return;
                };
                let mut g = game.borrow_mut();
                // Arrow keys would otherwise scroll the page mid-run
                if g.game.phase() == RunPhase::Running && g.game.is_bound(&event.key()) {
                    event.prevent_default();
                }
                g.game.handle_input(&input);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::from_keyboard(&event) {
                    game.borrow_mut().game.handle_input(&input);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while the page is unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().game.handle_input(&InputEvent::FocusLost);
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        if let Some(btn) = document.get_element_by_id(PLAY_BTN_ID) {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.game.phase() != RunPhase::Running {
                    g.start();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for id in [RESTART_BTN_ID, OVERLAY_RESTART_ID] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().restart();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        // Next frame is only requested once this one is done
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Dodgefall failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), dodgefall::GameError> {
    use dodgefall::renderer::VertexBatch;
    use dodgefall::sim::RunPhase;
    use dodgefall::{GameConfig, GameLoop};

    env_logger::init();
    log::info!("Dodgefall (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    // Usage: dodgefall [config.json] [max_frames]
    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60);

    config.seed.get_or_insert_with(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    let mut game = GameLoop::new(config)?;
    let surface = game.state().config.surface;
    let mut batch = VertexBatch::new(surface.width, surface.height);

    game.start();
    let mut frames = 0;
    while frames < max_frames && game.phase() == RunPhase::Running {
        game.run_frame(&mut batch, 1.0 / 60.0);
        frames += 1;
    }

    let state = game.state();
    println!(
        "frames={} score={} difficulty_level={} obstacles={} vertices={}",
        frames,
        state.score,
        state.difficulty.level,
        state.obstacles.len(),
        batch.len()
    );
    match game.game_over_message() {
        Some(message) => println!("{message}"),
        None => println!("Survived {} frames", frames),
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
