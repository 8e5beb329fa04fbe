//! Grid module - the persistent letter well.
//!
//! A 6x12 grid where each cell holds a single lowercase letter or nothing.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where row 0 is the TOP of the well and row 11 the
//! bottom, matching how tiles are drawn.

use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells in the well.
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The letter well - 6 columns x 12 rows using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * WIDTH + col).
    cells: [Tile; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_HEIGHT || col < 0 || col >= GRID_WIDTH {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> i8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i8 {
        GRID_HEIGHT
    }

    /// Get tile at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, tile: Tile) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and holds a letter).
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Height of the stack in a column, counted from the bottom row.
    ///
    /// Scans the whole column bottom-to-top and returns the offset of the
    /// HIGHEST occupied cell (last match wins, no early exit). For a column
    /// with a gap below an occupied cell this reports the topmost occupied
    /// offset, not the contiguous run; landing relies on exactly this.
    pub fn column_height(&self, col: i8) -> i8 {
        let mut result = 0;
        for height in 1..=GRID_HEIGHT {
            if self.is_occupied(GRID_HEIGHT - height, col) {
                result = height;
            }
        }
        result
    }

    /// Shift one column down by a row, starting at `from_row`.
    ///
    /// Every row from `from_row` up to 1 takes the letter from the row above;
    /// the top row of the column is left empty. Used once per column of a
    /// cleared word to compact the stack above it.
    pub fn shift_column_down(&mut self, col: i8, from_row: i8) {
        for row in (1..=from_row).rev() {
            let above = self.get(row - 1, col).unwrap_or(None);
            self.set(row, col, above);
        }
        self.set(0, col, None);
    }

    /// The row's letters as a string, with a space for every empty cell.
    /// This is the input to the word scan.
    pub fn row_text(&self, row: i8) -> String {
        let mut text = String::with_capacity(GRID_WIDTH as usize);
        for col in 0..GRID_WIDTH {
            text.push(self.get(row, col).unwrap_or(None).unwrap_or(' '));
        }
        text
    }

    /// Clear the entire grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
