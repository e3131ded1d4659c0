//! Per-frame driver tying input, simulation and rendering together
//!
//! `frame` is the single entry the host's animation-frame callback invokes.
//! It stays host-agnostic so the whole loop body also runs headless.

use crate::render::scene;
use crate::render::surface::Surface;
use crate::sim::{FrameInput, GamePhase, GameState, phase, tick};

/// Run one displayed frame: apply the pending click, step the simulation
/// while Playing, draw, then resolve score and victory outcomes.
pub fn frame<S: Surface>(state: &mut GameState, input: &FrameInput, surface: &mut S) {
    if input.click {
        phase::handle_click(state);
    }

    if state.phase == GamePhase::Playing {
        tick::step(state, input.pointer);
    }

    scene::draw(state, surface);

    phase::check_victory(state);
    // A point scored this frame puts the ball back for the next one. When the
    // point ended the match the phase is already Victory and the ball stays put.
    phase::recover_from_pause(state);
}
