//! Rendering module
//!
//! The scene renderer is a pure function of game state that issues draw
//! commands to a `Surface`. The canvas backend is the only implementation
//! that touches the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use surface::{NoopSurface, Surface, TextAlign};
