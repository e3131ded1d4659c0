//! Host-agnostic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-frame step, no wall-clock time
//! - Deterministic (no randomness anywhere)
//! - No rendering or platform dependencies

pub mod collision;
pub mod phase;
pub mod state;
pub mod tick;

pub use state::{Ball, GamePhase, GameState, Paddle, Side};
pub use tick::{FrameInput, step};
