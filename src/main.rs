//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, HtmlSelectElement};

    use grid_snake::consts::DEFAULT_SPEED_LEVEL;
    use grid_snake::input::{self, Command};
    use grid_snake::render::{Canvas2dRenderer, Render};
    use grid_snake::scheduler::TickScheduler;
    use grid_snake::sim::{GameState, StepEvent};
    use grid_snake::{HighScore, Theme};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        scheduler: TickScheduler,
        rng: Pcg32,
        highscore: HighScore,
        renderer: Option<Canvas2dRenderer>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(),
                scheduler: TickScheduler::default(),
                rng: Pcg32::seed_from_u64(seed),
                highscore: HighScore::load(),
                renderer: None,
            }
        }

        fn apply(&mut self, cmd: Command) {
            input::route(cmd, &mut self.state, &mut self.scheduler, &mut self.rng);
        }

        /// Draw the current state; terminal phases get the overlay
        fn render(&mut self) {
            let game_over = self.state.phase.is_terminal();
            if let Some(ref mut renderer) = self.renderer {
                renderer.render(&self.state, game_over);
            }
        }

        /// Update score/high-score text in the DOM
        fn update_hud(&self) {
            let document = match web_sys::window().and_then(|w| w.document()) {
                Some(d) => d,
                None => return,
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("highscore") {
                el.set_text_content(Some(&self.highscore.best.to_string()));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        {
            let mut g = game.borrow_mut();
            g.renderer = Canvas2dRenderer::new(canvas);
            if g.renderer.is_none() {
                log::error!("Canvas 2D context unavailable");
            }
            Theme::default().apply();
            g.render();
            g.update_hud();
        }

        setup_keyboard(game.clone());
        setup_pad_buttons(game.clone());
        setup_control_buttons(game.clone());
        setup_theme_select(game.clone());
        setup_speed_range(game.clone());

        request_animation_frame(game);

        log::info!("Grid Snake running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key().to_lowercase();
            if let Some(cmd) = input::command_for_key(&key) {
                if key == " " {
                    event.prevent_default();
                }
                game.borrow_mut().apply(cmd);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// On-screen directional pad: buttons carry `data-dir="up|down|left|right"`
    fn setup_pad_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let pads = match document.query_selector_all(".pad") {
            Ok(list) => list,
            Err(_) => return,
        };
        for i in 0..pads.length() {
            let Some(node) = pads.item(i) else { continue };
            let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let dir_name = el.get_attribute("data-dir").unwrap_or_default();
            let Some(dir) = input::direction_from_name(&dir_name) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().apply(Command::SetDirection(dir));
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_control_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("btn-start") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.apply(Command::Start);
                g.render();
                g.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("btn-pause") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().apply(Command::TogglePause);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_theme_select(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(select) = document
            .get_element_by_id("theme-select")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };

        let select_clone = select.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(theme) = Theme::from_str(&select_clone.value()) {
                game.borrow_mut().apply(Command::SetTheme(theme));
            }
        });
        let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_speed_range(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(range) = document
            .get_element_by_id("speed-range")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let apply_level = {
            let range = range.clone();
            move |game: &Rc<RefCell<Game>>| {
                let level: u8 = range.value().parse().unwrap_or(DEFAULT_SPEED_LEVEL);
                game.borrow_mut().apply(Command::SetSpeedLevel(level));
                if let Some(label) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("speed-label"))
                {
                    label.set_text_content(Some(&level.to_string()));
                }
            }
        };

        // Pick up the slider's current position at startup
        apply_level(&game);

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            apply_level(&game);
        });
        let _ = range.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let event = {
                let Game {
                    ref mut state,
                    ref mut scheduler,
                    ref mut rng,
                    ..
                } = *g;
                scheduler.on_time_signal(time, state, rng)
            };

            match event {
                StepEvent::Idle => {}
                StepEvent::Moved => g.render(),
                StepEvent::Scored => {
                    let score = g.state.score;
                    if g.highscore.record(score) {
                        log::info!("new high score: {}", score);
                    }
                    g.render();
                    g.update_hud();
                }
                StepEvent::Died | StepEvent::BoardFull => {
                    g.render();
                    g.update_hud();
                }
            }
        }

        // Always re-arm; the scheduler is idempotent after game over
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_snake::consts::GRID_SIZE;
    use grid_snake::input::{self, Command};
    use grid_snake::render::{NullRenderer, Render};
    use grid_snake::scheduler::TickScheduler;
    use grid_snake::sim::{Direction, GameState, StepEvent};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Grid Snake (native) - headless smoke run");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new();
    let mut scheduler = TickScheduler::default();
    let mut renderer = NullRenderer;

    input::route(Command::Start, &mut state, &mut scheduler, &mut rng);
    renderer.render(&state, false);

    // Greedy autopilot: head toward the food one axis at a time, skipping
    // moves that would reverse or immediately collide.
    let pick_direction = |state: &GameState| -> Option<Direction> {
        let head = state.head();
        let food = state.food?;
        let mut candidates = Vec::new();
        if food.x > head.x {
            candidates.push(Direction::Right);
        } else if food.x < head.x {
            candidates.push(Direction::Left);
        }
        if food.y > head.y {
            candidates.push(Direction::Down);
        } else if food.y < head.y {
            candidates.push(Direction::Up);
        }
        // Fall back to anything survivable
        candidates.extend([
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]);
        candidates.into_iter().find(|&dir| {
            let next = head.offset(dir);
            dir != state.direction.opposite() && next.in_bounds() && !state.occupies(next)
        })
    };

    // Synthetic 60Hz clock driving the scheduler
    let mut now_ms = 0.0;
    let frame_ms = 1000.0 / 60.0;
    let max_frames = 60 * 60 * 5; // five simulated minutes

    for _ in 0..max_frames {
        now_ms += frame_ms;
        if let Some(dir) = pick_direction(&state) {
            input::route(
                Command::SetDirection(dir),
                &mut state,
                &mut scheduler,
                &mut rng,
            );
        }
        let event = scheduler.on_time_signal(now_ms, &mut state, &mut rng);
        if event != StepEvent::Idle {
            renderer.render(&state, state.phase.is_terminal());
        }
        match event {
            StepEvent::Scored => log::info!("score: {}", state.score),
            StepEvent::Died => {
                log::info!("died at step {} with score {}", state.steps, state.score);
                break;
            }
            StepEvent::BoardFull => {
                log::info!("filled the {}x{} board!", GRID_SIZE, GRID_SIZE);
                break;
            }
            _ => {}
        }
    }

    println!(
        "final score: {} (length {}, {} steps)",
        state.score,
        state.snake.len(),
        state.steps
    );
}
