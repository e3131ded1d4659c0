//! Game entities and the owning simulation context

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title banner shown, waiting for the first click
    Intro,
    /// Active gameplay
    Playing,
    /// Transient post-point state; the ball recenters before the next frame plays
    Paused,
    /// Match over; the winning side is shown until a click starts a new match
    Victory(Side),
}

/// The two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    /// Display label for the scoreboard and victory banner
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Cpu => "CPU",
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

/// A paddle. Only `pos.x` changes after construction.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: &'static str,
}

impl Paddle {
    /// Horizontal center of the paddle face
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// Complete game state, owned by the host and passed by reference into the
/// step and render functions each frame
#[derive(Debug, Clone)]
pub struct GameState {
    /// Surface dimensions, read once at startup
    pub bounds: Vec2,
    pub ball: Ball,
    pub player: Paddle,
    pub cpu: Paddle,
    pub player_score: u32,
    pub cpu_score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh state for a surface of the given dimensions
    pub fn new(bounds: Vec2) -> Self {
        let paddle_x = bounds.x / 2.0 - PADDLE_SIZE.x / 2.0;
        Self {
            bounds,
            ball: Ball {
                pos: bounds / 2.0,
                vel: BALL_START_VEL,
                radius: BALL_RADIUS,
                color: BALL_COLOR,
            },
            player: Paddle {
                pos: Vec2::new(paddle_x, bounds.y - PLAYER_PADDLE_INSET),
                size: PADDLE_SIZE,
                color: PLAYER_COLOR,
            },
            cpu: Paddle {
                pos: Vec2::new(paddle_x, CPU_PADDLE_Y),
                size: PADDLE_SIZE,
                color: CPU_COLOR,
            },
            player_score: 0,
            cpu_score: 0,
            phase: GamePhase::Intro,
        }
    }

    /// Surface midpoint
    pub fn center(&self) -> Vec2 {
        self.bounds / 2.0
    }

    /// The winning side, if the match has ended
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Victory(side) => Some(side),
            _ => None,
        }
    }
}
