//! Per-frame simulation step
//!
//! Advances the ball, resolves scoring and reflections, and moves both
//! paddles. One invocation per displayed frame, fixed step, no delta-time
//! scaling: visual speed follows the display refresh rate.

use glam::Vec2;

use crate::consts::*;

use super::collision;
use super::state::{GamePhase, GameState, Side};

/// Latest-value input cache, sampled once per frame
///
/// `pointer` holds the last surface-relative pointer position (None until the
/// first event arrives). `click` is one-shot and cleared by the host after
/// each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: Option<Vec2>,
    pub click: bool,
}

/// Advance the simulation by one frame. The caller invokes this only when the
/// frame begins in `Playing`.
pub fn step(state: &mut GameState, pointer: Option<Vec2>) {
    move_ball(state);
    update_player_paddle(state, pointer);
    // A score ends the rally mid-step; the opponent sits out that frame
    if state.phase == GamePhase::Playing {
        update_cpu_paddle(state);
    }
}

/// Ball motion, boundary scoring, wall and paddle reflections
fn move_ball(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Past the bottom: the ball leaves the visible area by the overshoot
    // margin before the point registers
    if ball.pos.y > state.bounds.y + SCORE_OVERSHOOT {
        score_point(state, Side::Cpu);
        return;
    }

    // Past the top
    if ball.pos.y < -SCORE_OVERSHOOT {
        score_point(state, Side::Player);
        return;
    }

    collision::reflect_side_walls(ball, state.bounds.x);

    if collision::hits_player_paddle(ball, &state.player) {
        ball.vel.y = -ball.vel.y;
    }
    if collision::hits_cpu_paddle(ball, &state.cpu) {
        ball.vel.y = -ball.vel.y;
    }
}

fn score_point(state: &mut GameState, side: Side) {
    match side {
        Side::Player => state.player_score += 1,
        Side::Cpu => state.cpu_score += 1,
    }
    state.phase = GamePhase::Paused;
    log::info!(
        "{} scores, {} to {}",
        side.label(),
        state.player_score,
        state.cpu_score
    );
}

/// Pointer x maps across a half-width input region; doubling it spans the
/// full play width. The paddle is then clamped to the surface.
fn update_player_paddle(state: &mut GameState, pointer: Option<Vec2>) {
    let Some(pointer) = pointer else {
        return;
    };
    let paddle = &mut state.player;
    paddle.pos.x = pointer.x * 2.0 - paddle.size.x / 2.0;

    if paddle.pos.x + paddle.size.x >= state.bounds.x {
        log::trace!("player paddle clamped at right wall, x={}", paddle.pos.x);
        paddle.pos.x = state.bounds.x - paddle.size.x;
    }
    if paddle.pos.x <= 0.0 {
        paddle.pos.x = 0.0;
    }
}

/// Scripted opponent: recenter while the ball moves away, chase the ball's x
/// while it approaches. Its x is never clamped to the surface; it only ever
/// pursues targets that are themselves in bounds.
fn update_cpu_paddle(state: &mut GameState) {
    let center = state.cpu.center_x();
    let midline = state.bounds.x / 2.0;

    if state.ball.vel.y > 0.0 {
        // ball is heading for the player, drift back to the midline
        if center > midline {
            state.cpu.pos.x -= CPU_PADDLE_SPEED;
        }
        if center < midline {
            state.cpu.pos.x += CPU_PADDLE_SPEED;
        }
        return;
    }

    if state.ball.pos.x < center {
        state.cpu.pos.x -= CPU_PADDLE_SPEED;
    }
    if state.ball.pos.x > center {
        state.cpu.pos.x += CPU_PADDLE_SPEED;
    }
}
