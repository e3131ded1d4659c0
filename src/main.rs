//! Pointer Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlCanvasElement, MouseEvent, PointerEvent};

    use pointer_pong::consts::{BANNER_FONT_PX, FONT_FAMILY};
    use pointer_pong::render::CanvasSurface;
    use pointer_pong::sim::{FrameInput, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: FrameInput,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pointer Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The display font loads before the loop starts; without the wait the
        // first banner paints in a fallback face
        let font_spec = format!("{BANNER_FONT_PX}px {FONT_FAMILY}");
        if let Err(e) = JsFuture::from(document.fonts().load(&font_spec)).await {
            log::warn!("Font load failed: {e:?}");
        }

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");
        let bounds = surface.size();

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(bounds),
            surface,
            input: FrameInput::default(),
        }));

        log::info!("Surface is {}x{}", bounds.x, bounds.y);

        setup_input_handlers(&canvas, game.clone());

        // Start the frame loop
        request_animation_frame(game);

        log::info!("Pointer Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer move - cache the latest surface-relative position
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let pos = Vec2::new(
                    event.client_x() as f32 - rect.left() as f32,
                    event.client_y() as f32 - rect.top() as f32,
                );
                game.borrow_mut().input.pointer = Some(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - one-shot flag, consumed by the next frame
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.click = true;
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
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

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            let Game {
                state,
                surface,
                input,
            } = &mut *g;
            pointer_pong::game::frame(state, input, surface);
            // Clear one-shot inputs after processing
            input.click = false;
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pointer Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a short headless match to exercise the frame path end to end
#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use glam::Vec2;
    use pointer_pong::game::frame;
    use pointer_pong::render::NoopSurface;
    use pointer_pong::sim::{FrameInput, GamePhase, GameState};

    let mut state = GameState::new(Vec2::new(800.0, 600.0));
    let mut surface = NoopSurface;

    // First click leaves the intro, then the rally runs on its own
    let click = FrameInput {
        click: true,
        ..Default::default()
    };
    frame(&mut state, &click, &mut surface);
    assert_eq!(state.phase, GamePhase::Playing);

    let idle = FrameInput::default();
    for _ in 0..2000 {
        frame(&mut state, &idle, &mut surface);
        if state.winner().is_some() {
            break;
        }
    }

    println!(
        "smoke run: player {} cpu {}{}",
        state.player_score,
        state.cpu_score,
        match state.winner() {
            Some(side) => format!(", {} wins", side.label()),
            None => String::new(),
        }
    );
}
