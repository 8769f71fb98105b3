//! Lucky Six entry point
//!
//! Handles platform-specific initialization, wires the DOM controls, and runs
//! the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent};

    use lucky_six::consts::*;
    use lucky_six::platform::LocalStorage;
    use lucky_six::sim::{Difficulty, GameSession};

    /// Unicode glyphs for die faces 1-6
    const DIE_FACES: [&str; 6] = ["\u{2680}", "\u{2681}", "\u{2682}", "\u{2683}", "\u{2684}", "\u{2685}"];

    /// Game instance holding session state and frame timing
    struct Game {
        session: GameSession<LocalStorage>,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                session: GameSession::new(seed, LocalStorage),
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run fixed-timestep ticks for this frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.session.tick();
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let state = self.session.state();

            // Update score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&state.score.to_string()));
            }

            // Update remaining attempts
            if let Some(el) = document
                .query_selector("#hud-attempts .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&state.remaining_attempts.to_string()));
            }

            // Update the die face and tumble animation
            if let Some(el) = document.get_element_by_id("die") {
                let face = state.dice_value.unwrap_or(FACE_MIN);
                el.set_text_content(Some(DIE_FACES[(face - 1) as usize]));
                let class = if state.is_rolling() {
                    "die rolling"
                } else if state.out_of_attempts() {
                    "die exhausted"
                } else {
                    "die"
                };
                let _ = el.set_attribute("class", class);
            }

            // Highlight the picked number
            for n in FACE_MIN..=FACE_MAX {
                if let Some(btn) = document.get_element_by_id(&format!("pick-{}", n)) {
                    let class = if n == state.selected_number {
                        "pick-btn selected"
                    } else {
                        "pick-btn"
                    };
                    let _ = btn.set_attribute("class", class);
                }
            }

            // Highlight the active difficulty
            for tier in Difficulty::ALL {
                if let Some(btn) = document.get_element_by_id(&format!("difficulty-{}", tier.as_str()))
                {
                    let class = if tier == state.difficulty {
                        "difficulty-btn selected"
                    } else {
                        "difficulty-btn"
                    };
                    let _ = btn.set_attribute("class", class);
                }
            }

            // Status line: rolling > exhausted > last outcome > idle hint
            if let Some(el) = document.get_element_by_id("roll-status") {
                let text = if state.is_rolling() {
                    "Rolling...".to_string()
                } else if state.out_of_attempts() {
                    "Out of attempts - reset to keep playing".to_string()
                } else if let Some(outcome) = state.last_roll {
                    if outcome.matched {
                        format!("Matched! +{} points", outcome.reward)
                    } else {
                        format!("Rolled {} - no match", outcome.face)
                    }
                } else {
                    "Click the die to roll".to_string()
                };
                el.set_text_content(Some(&text));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lucky Six starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        setup_number_buttons(&document, game.clone());
        setup_difficulty_buttons(&document, game.clone());
        setup_die(&document, game.clone());
        setup_reset_button(&document, game.clone());
        setup_modals(&document, game.clone());

        request_animation_frame(game);

        log::info!("Lucky Six running!");
    }

    fn setup_number_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for n in FACE_MIN..=FACE_MAX {
            if let Some(btn) = document.get_element_by_id(&format!("pick-{}", n)) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().session.select_number(n);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_difficulty_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for tier in Difficulty::ALL {
            if let Some(btn) = document.get_element_by_id(&format!("difficulty-{}", tier.as_str())) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().session.set_difficulty(tier);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_die(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(die) = document.get_element_by_id("die") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.roll();
            });
            let _ = die.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.reset_game();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Rules and saved-score overlays; open/close state lives in the DOM only
    fn setup_modals(document: &Document, game: Rc<RefCell<Game>>) {
        // Rules modal
        if let Some(btn) = document.get_element_by_id("rules-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(modal) = document.get_element_by_id("rules-modal") {
                    let _ = modal.set_attribute("class", "modal");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        if let Some(btn) = document.get_element_by_id("rules-close-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(modal) = document.get_element_by_id("rules-modal") {
                    let _ = modal.set_attribute("class", "modal hidden");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Saved-score modal: snapshot the persisted score at open time
        if let Some(btn) = document.get_element_by_id("record-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let score = game.borrow().session.state().score;
                if let Some(el) = document.get_element_by_id("record-score") {
                    el.set_text_content(Some(&score.to_string()));
                }
                if let Some(modal) = document.get_element_by_id("record-modal") {
                    let _ = modal.set_attribute("class", "modal");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        if let Some(btn) = document.get_element_by_id("record-close-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(modal) = document.get_element_by_id("record-modal") {
                    let _ = modal.set_attribute("class", "modal hidden");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lucky Six (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web version");

    println!("\nRunning smoke roll...");
    smoke_roll();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_roll() {
    use lucky_six::consts::ROLL_DURATION_TICKS;
    use lucky_six::platform::MemoryStore;
    use lucky_six::sim::GameSession;

    let mut session = GameSession::new(0x5eed, MemoryStore::new());
    session.roll();
    for _ in 0..ROLL_DURATION_TICKS {
        session.tick();
    }

    let state = session.state();
    let face = state.dice_value.expect("roll should resolve");
    assert_eq!(state.remaining_attempts, 9);
    println!("✓ Rolled a {} with {} attempts left", face, state.remaining_attempts);
}
