//! Letris: a terminal word-drop puzzle.
//!
//! Three stacked letter tiles fall down a narrow well; shift them, shuffle
//! their order, or speed their descent. Landed letters merge into the grid,
//! and any row spelling a dictionary word is cleared and scored.
//!
//! `core` holds the rules (no I/O), `term` the framebuffer renderer and
//! `input` the key mapping.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
