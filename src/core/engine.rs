//! SimulationEngine - one tick of tile physics, landing and word resolution.
//!
//! The engine owns no state: it borrows the grid, the falling group, the
//! score and the RNG from the session for the duration of a single
//! `advance` call. Animation is not the engine's business; it emits each
//! word match to an observer BEFORE mutating the grid, and the frontend
//! paces its flash frames inside that callback.

use crate::core::dict::Dictionary;
use crate::core::falling::FallingGroup;
use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{GRID_HEIGHT, GRID_WIDTH, GROUP_SIZE, MIN_WORD_LEN};

/// A dictionary hit found during row scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub row: i8,
    pub start: i8,
    pub word: String,
}

impl WordMatch {
    /// Exclusive end column of the matched cells.
    pub fn end(&self) -> i8 {
        self.start + self.word.len() as i8
    }
}

/// Result of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The group moved but did not land.
    Falling,
    /// The group merged into the grid and word resolution settled.
    Landed { words_cleared: u32 },
    /// The stack was too tall to place the group. The grid and the stranded
    /// group are left untouched for the renderer.
    GameOver,
}

/// Hook for intermediate states the renderer wants to show.
///
/// Callbacks run synchronously inside the tick; a frontend may block here
/// (flash animation, game-over pause) - the core itself never sleeps.
pub trait EngineObserver {
    /// A word was matched. The grid still holds the matched letters; they are
    /// cleared immediately after this returns.
    fn word_matched(&mut self, _grid: &Grid, _found: &WordMatch) {}
}

/// Observer that ignores everything (headless play and tests).
pub struct NullObserver;

impl EngineObserver for NullObserver {}

/// Borrowed view of the session state the engine advances.
pub struct SimulationEngine<'a> {
    pub grid: &'a mut Grid,
    pub group: &'a mut FallingGroup,
    pub score: &'a mut u32,
    pub rng: &'a mut SimpleRng,
    pub dict: &'a Dictionary,
}

impl<'a> SimulationEngine<'a> {
    /// Advance the simulation by `elapsed_ms` of wall-clock time.
    pub fn advance(
        &mut self,
        elapsed_ms: u32,
        drop_speed: f32,
        observer: &mut dyn EngineObserver,
    ) -> TickOutcome {
        // Movement, scaled by measured elapsed time.
        self.group.y += drop_speed * elapsed_ms as f32 / 1000.0;

        let height = self.grid.column_height(self.group.col);
        let stack_top = (GRID_HEIGHT - height) as f32;

        if self.group.y + (GROUP_SIZE as f32) < stack_top {
            return TickOutcome::Falling;
        }

        // Collision ejection: bottom-align the group on the stack.
        self.group.y = stack_top - GROUP_SIZE as f32;

        if height > GRID_HEIGHT - GROUP_SIZE {
            // Fewer than three empty rows left in this column.
            return TickOutcome::GameOver;
        }

        // Merge: bottom, middle, top letters into the landing column.
        let col = self.group.col;
        self.grid.set(GRID_HEIGHT - height - 1, col, Some(self.group.letters[2]));
        self.grid.set(GRID_HEIGHT - height - 2, col, Some(self.group.letters[1]));
        self.grid.set(GRID_HEIGHT - height - 3, col, Some(self.group.letters[0]));

        let words_cleared = self.resolve_words(observer);

        self.group.respawn(self.rng);

        TickOutcome::Landed { words_cleared }
    }

    /// Scan-clear-shift-rescan until a full pass finds no word.
    ///
    /// Rows are scanned bottom to top. Within a row the leftmost starting
    /// offset wins, and among substrings sharing a start the longest wins.
    /// After every clear the scan restarts from the bottom row, since
    /// shifting can bring new letters into rows already scanned.
    pub fn resolve_words(&mut self, observer: &mut dyn EngineObserver) -> u32 {
        let width = GRID_WIDTH as usize;
        let mut words_cleared = 0;

        let mut scan_row = GRID_HEIGHT - 1;
        while scan_row >= 0 {
            let row_text = self.grid.row_text(scan_row);
            let mut found = false;

            'starts: for start in 0..width {
                for len in (MIN_WORD_LEN..=width).rev() {
                    let end = start + len;
                    if end > width {
                        continue;
                    }
                    let candidate = &row_text[start..end];
                    if !self.dict.contains(candidate) {
                        continue;
                    }

                    *self.score += len as u32;
                    words_cleared += 1;

                    let found_match = WordMatch {
                        row: scan_row,
                        start: start as i8,
                        word: candidate.to_string(),
                    };
                    observer.word_matched(self.grid, &found_match);

                    // Per-column compaction, independent of other columns.
                    for col in start..end {
                        self.grid.shift_column_down(col as i8, scan_row);
                    }

                    found = true;
                    break 'starts;
                }
            }

            if found {
                // Restart the full scan from the bottom row.
                scan_row = GRID_HEIGHT;
            }
            scan_row -= 1;
        }

        words_cleared
    }
}
