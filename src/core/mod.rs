//! Core module - pure game rules with no I/O.
//!
//! Everything in here is deterministic under a seed and unit-testable:
//! the letter well, the falling group, the word-resolution engine and the
//! session that owns them.

pub mod dict;
pub mod engine;
pub mod falling;
pub mod grid;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use dict::Dictionary;
pub use engine::{EngineObserver, NullObserver, SimulationEngine, TickOutcome, WordMatch};
pub use falling::FallingGroup;
pub use grid::Grid;
pub use rng::{letter_for_roll, random_letter, SimpleRng};
pub use session::GameSession;
