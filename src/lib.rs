//! Pointer Pong - classic Pong against a scripted opponent
//!
//! Core modules:
//! - `sim`: Host-agnostic simulation (ball kinematics, collisions, phases)
//! - `render`: Scene drawing over an abstract command surface
//! - `game`: The per-frame driver invoked by the host's frame scheduler

pub mod game;
pub mod render;
pub mod sim;

pub use game::frame;
pub use sim::{FrameInput, GamePhase, GameState, Side};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Points needed to win the match
    pub const GAME_LENGTH: u32 = 5;

    /// Paddle dimensions, both sides
    pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 30.0);
    /// The player paddle's top edge sits this far above the bottom of the surface
    pub const PLAYER_PADDLE_INSET: f32 = 100.0;
    /// CPU paddle top edge; its face hangs 100px below the top of the surface
    pub const CPU_PADDLE_Y: f32 = 100.0 - PADDLE_SIZE.y;
    /// CPU paddle travel per frame
    pub const CPU_PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_VEL: Vec2 = Vec2::new(-7.0, 10.0);

    /// Horizontal slack around a paddle's span when testing for a hit
    pub const PADDLE_CUSHION_X: f32 = 10.0;
    /// Vertical depth of the hit band behind a paddle's face. One paddle
    /// height, so the ball cannot step across the band in a single frame.
    pub const PADDLE_CUSHION_Y: f32 = PADDLE_SIZE.y;

    /// How far past a horizontal edge the ball travels before the point registers
    pub const SCORE_OVERSHOOT: f32 = 100.0;

    /// Display font, preloaded before the frame loop starts
    pub const FONT_FAMILY: &str = "Fritz";
    pub const BANNER_FONT_PX: f32 = 96.0;
    pub const PROMPT_FONT_PX: f32 = 48.0;

    /// Flat entity and overlay colors
    pub const BALL_COLOR: &str = "#fff";
    pub const PLAYER_COLOR: &str = "coral";
    pub const CPU_COLOR: &str = "cyan";
    pub const BANNER_COLOR: &str = "white";
    pub const PROMPT_COLOR: &str = "gray";
}
