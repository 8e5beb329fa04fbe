//! Terminal rendering layer.
//!
//! `core` stays deterministic and testable; this layer maps session state
//! into a styled framebuffer (`GameView`) and flushes it to the terminal
//! with diffed redraws (`TerminalRenderer`).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
