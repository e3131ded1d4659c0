//! Wall and paddle collision checks
//!
//! Paddle checks use a tolerance band (the cushion) around the paddle so the
//! discrete per-frame step cannot tunnel past a surface between two frames.

use crate::consts::{PADDLE_CUSHION_X, PADDLE_CUSHION_Y};

use super::state::{Ball, Paddle};

/// Reflect off the vertical walls. The x position is not pushed back inside,
/// so a slight overshoot may render for a frame before the ball turns around.
pub fn reflect_side_walls(ball: &mut Ball, width: f32) {
    if ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x + ball.radius >= width {
        ball.vel.x = -ball.vel.x;
    }
}

fn within_span(x: f32, paddle: &Paddle) -> bool {
    x <= paddle.pos.x + paddle.size.x + PADDLE_CUSHION_X && x >= paddle.pos.x - PADDLE_CUSHION_X
}

/// Ball striking the player paddle from above. Only downward travel counts.
pub fn hits_player_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let leading_edge = ball.pos.y + ball.radius;
    within_span(ball.pos.x, paddle)
        && leading_edge > paddle.pos.y
        && leading_edge < paddle.pos.y + PADDLE_CUSHION_Y
        && ball.vel.y > 0.0
}

/// Ball striking the CPU paddle from below. Only upward travel counts.
pub fn hits_cpu_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let leading_edge = ball.pos.y - ball.radius;
    within_span(ball.pos.x, paddle)
        && leading_edge < paddle.pos.y + paddle.size.y
        && leading_edge > paddle.pos.y - PADDLE_CUSHION_Y
        && ball.vel.y < 0.0
}
