//! Browser client for Flappy Learn
//!
//! Canvas 2D rendering over the `game_core` simulation. Input, timers and
//! storage are browser-specific; the screen flow, input mapping, overlay
//! layout and logger setup are plain Rust and tested natively.

pub mod fsm;
pub mod input;
pub mod layout;
pub mod logger;

#[cfg(target_arch = "wasm32")]
mod renderer;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;

    use game_core::{Config, Game, SessionState, TickDriver};
    use glam::Vec2;
    use log::{info, warn, Level};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use crate::fsm::{Screen, ScreenAction, ScreenFsm};
    use crate::input::is_jump_event;
    use crate::layout::{self, QuizLayout};
    use crate::logger;
    use crate::renderer::{Frame, Renderer};
    use crate::scheduler::{RafScheduler, Timeout};
    use crate::storage::LocalStore;

    /// Everything the page owns
    struct App {
        window: Window,
        game: Game<LocalStore>,
        screen: ScreenFsm,
        driver: TickDriver<RafScheduler>,
        renderer: Renderer,
        last_frame_ms: Option<f64>,
        reveal: Option<Timeout>,
        _listeners: Vec<Listener>,
    }

    /// A DOM event listener, removed again when dropped
    struct Listener {
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    }

    impl Listener {
        fn new(
            target: &EventTarget,
            kind: &'static str,
            handler: impl FnMut(Event) + 'static,
        ) -> Result<Self, JsValue> {
            let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            Ok(Self {
                target: target.clone(),
                kind,
                closure,
            })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            let callback = self.closure.as_ref().unchecked_ref();
            if let Err(err) = self.target.remove_event_listener_with_callback(self.kind, callback) {
                warn!("failed to remove {} listener: {err:?}", self.kind);
            }
        }
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    /// Run `f` against the app if it is up and not already borrowed
    fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
        APP.with(|cell| {
            let mut slot = cell.try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }

    impl App {
        fn render(&self) {
            let snapshot = self.game.snapshot();
            let frame = Frame {
                screen: self.screen.screen(),
                snapshot: &snapshot,
                quiz: self.game.quiz.as_ref(),
            };
            if let Err(err) = self.renderer.draw(&frame) {
                warn!("render failed: {err:?}");
            }
        }

        /// Keep the frame request in step with the session
        fn sync_ticking(&mut self) {
            let running = self.game.fsm.is_running();
            if !running {
                self.last_frame_ms = None;
            }
            self.driver.sync(running);
        }

        fn on_frame(&mut self, now_ms: f64) {
            self.driver.frame_fired();

            let dt = self
                .last_frame_ms
                .map(|last| ((now_ms - last) / 1000.0) as f32)
                .unwrap_or(0.0);
            self.last_frame_ms = Some(now_ms);

            self.game.advance(dt);
            self.render();
            self.sync_ticking();
        }

        fn on_jump(&mut self) {
            if !self.screen.is_playing() {
                return;
            }
            if matches!(self.game.state(), SessionState::Idle | SessionState::Running) {
                self.game.jump();
                self.sync_ticking();
                self.render();
            }
        }

        fn on_pointer(&mut self, point: Vec2) {
            let field = self.game.field;
            match self.screen.screen() {
                Screen::Start => {
                    let (_, button) = layout::start_card(field.width, field.height);
                    if button.contains(point) {
                        self.screen.transition(ScreenAction::StartGame);
                        self.render();
                    }
                }
                Screen::Playing => match self.game.state() {
                    SessionState::Idle | SessionState::Running => self.on_jump(),
                    SessionState::AwaitingAnswer => self.on_quiz_click(point),
                    SessionState::Over => {}
                },
                Screen::GameOver => {
                    let (_, button) = layout::game_over_card(field.width, field.height);
                    if button.contains(point) {
                        self.restart();
                    }
                }
            }
        }

        fn on_quiz_click(&mut self, point: Vec2) {
            let field = self.game.field;
            let Some(quiz) = self.game.quiz.as_ref() else {
                return;
            };
            let Some(option) = QuizLayout::for_quiz(field.width, field.height, quiz).hit_option(point)
            else {
                return;
            };
            let Some(verdict) = self.game.select_answer(option) else {
                return;
            };

            let resolve = || {
                with_app(App::on_reveal_done);
            };
            match Timeout::start(&self.window, verdict.delay_ms, resolve) {
                Ok(timeout) => self.reveal = Some(timeout),
                Err(err) => {
                    warn!("reveal timer failed: {err:?}; resolving now");
                    self.on_reveal_done();
                    return;
                }
            }
            self.render();
        }

        fn on_reveal_done(&mut self) {
            self.reveal = None;
            if self.game.resolve_quiz().is_none() {
                return;
            }
            if self.game.state() == SessionState::Over {
                self.screen.transition(ScreenAction::GameOver);
            }
            self.sync_ticking();
            self.render();
        }

        fn restart(&mut self) {
            if !self.game.reset().success {
                return;
            }
            self.screen.transition(ScreenAction::Restart);
            self.sync_ticking();
            self.render();
        }

        fn on_resize(&mut self) {
            let container = self
                .renderer
                .canvas()
                .parent_element()
                .map(|parent| parent.client_width() as f32)
                .unwrap_or(self.game.config.field_width);
            self.game.resize(container);
            self.renderer.resize(self.game.field.width, self.game.field.height);
            self.render();
        }
    }

    /// Pointer position in canvas pixels, allowing for CSS scaling
    fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let scale_x = canvas.width() as f32 / canvas.client_width().max(1) as f32;
        let scale_y = canvas.height() as f32 / canvas.client_height().max(1) as f32;
        Vec2::new(event.offset_x() as f32 * scale_x, event.offset_y() as f32 * scale_y)
    }

    /// Input and resize listeners for one app instance
    fn listeners(canvas: &HtmlCanvasElement, window: &Window) -> Result<Vec<Listener>, JsValue> {
        let pointer_canvas = canvas.clone();
        let pointer = Listener::new(canvas, "pointerdown", move |event: Event| {
            event.prevent_default();
            let point = canvas_point(&pointer_canvas, event.unchecked_ref::<MouseEvent>());
            with_app(|app| app.on_pointer(point));
        })?;
        let key = Listener::new(window, "keydown", |event: Event| {
            if is_jump_event(event.unchecked_ref::<KeyboardEvent>()) {
                event.prevent_default();
                with_app(App::on_jump);
            }
        })?;
        let resize = Listener::new(window, "resize", |_event: Event| {
            with_app(App::on_resize);
        })?;
        Ok(vec![pointer, key, resize])
    }

    fn parse_config(config_json: Option<String>) -> Result<Config, JsValue> {
        match config_json {
            Some(json) if !json.trim().is_empty() => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid game config: {e}"))),
            _ => Ok(Config::default()),
        }
    }

    /// Start the game on `canvas`. `config_json` may override any tuning
    /// field; missing fields keep their defaults.
    #[wasm_bindgen]
    pub fn start_game(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
        logger::init(Level::Info);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let config = parse_config(config_json)?;
        let seed = js_sys::Date::now() as u64;

        let scheduler = RafScheduler::new(window.clone(), |now_ms| {
            with_app(|app| app.on_frame(now_ms));
        });
        let app = App {
            window: window.clone(),
            game: Game::new(config, LocalStore::new(), seed),
            screen: ScreenFsm::new(),
            driver: TickDriver::new(scheduler),
            renderer: Renderer::new(canvas.clone())?,
            last_frame_ms: None,
            reveal: None,
            _listeners: listeners(&canvas, &window)?,
        };
        info!("starting with high score {}", app.game.score.high);

        // A restarted page replaces the old app; dropping it detaches its
        // listeners and clears its timers
        let old = APP.with(|cell| cell.borrow_mut().replace(app));
        if let Some(mut old) = old {
            old.driver.stop();
        }

        with_app(App::on_resize);
        Ok(())
    }

    /// External answer signal, for pages that render their own quiz
    #[wasm_bindgen]
    pub fn answer(correct: bool) -> bool {
        with_app(|app| {
            let result = app.game.answer(correct);
            if result.success {
                app.reveal = None;
                if app.game.state() == SessionState::Over {
                    app.screen.transition(ScreenAction::GameOver);
                }
                app.sync_ticking();
                app.render();
            }
            result.success
        })
        .unwrap_or(false)
    }

    #[wasm_bindgen]
    pub fn high_score() -> u32 {
        with_app(|app| app.game.score.high).unwrap_or(0)
    }

    /// Stop ticking, e.g. before the page tears the canvas down
    #[wasm_bindgen]
    pub fn stop_game() {
        with_app(|app| {
            app.driver.stop();
            app.reveal = None;
        });
    }

}
