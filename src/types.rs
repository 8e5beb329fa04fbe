//! Core types and tuning constants shared across the application.
//! Pure data, no external dependencies.

/// Well dimensions (cells).
pub const GRID_WIDTH: i8 = 6;
pub const GRID_HEIGHT: i8 = 12;

/// Number of tiles in the falling group.
pub const GROUP_SIZE: i8 = 3;

/// Shortest row substring worth a dictionary lookup.
pub const MIN_WORD_LEN: usize = 3;

/// Tick pacing (milliseconds). Physics is scaled by measured elapsed time,
/// so this only bounds how often we poll and redraw.
pub const TICK_MS: u32 = 16;

/// Drop speeds in cells per second.
pub const BASE_DROP_SPEED: f32 = 1.0;
pub const FAST_DROP_SPEED: f32 = 4.0;

/// Word-clear flash animation: frame count and per-frame duration.
pub const FLASH_COUNT: u32 = 12;
pub const FLASH_FRAME_MS: u64 = 200;

/// How long the final board stays on screen after a game ends.
pub const GAME_OVER_PAUSE_MS: u64 = 3000;

/// One grid cell: a lowercase letter, or empty.
pub type Tile = Option<char>;

/// Execution stage of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Splash,
    Playing,
    GameOver,
}

/// Horizontal move direction for the falling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

impl ShiftDirection {
    pub fn delta(self) -> i8 {
        match self {
            ShiftDirection::Left => -1,
            ShiftDirection::Right => 1,
        }
    }
}

/// Discrete player intents delivered to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    Start,
    ShiftLeft,
    ShiftRight,
    Shuffle,
    FastDropOn,
    FastDropOff,
}
