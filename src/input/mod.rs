//! Input layer: crossterm key events to game intents.

pub mod handler;

pub use handler::{should_quit, InputHandler};
