//! FallingGroup - the three-tile stack under player control.

use crate::core::rng::{random_letter, SimpleRng};
use crate::types::{GRID_HEIGHT, GROUP_SIZE};

/// The falling three-letter stack.
///
/// `y` is the CONTINUOUS vertical position of the group's top tile, measured
/// in cell units from the top of the well (so a freshly spawned group sits at
/// -3.0, fully above the grid). The column is discrete.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingGroup {
    pub col: i8,
    pub y: f32,
    /// Letters ordered top, middle, bottom.
    pub letters: [char; GROUP_SIZE as usize],
}

impl FallingGroup {
    /// An off-grid placeholder group; `respawn` before use.
    pub fn new() -> Self {
        Self {
            col: 0,
            y: -(GROUP_SIZE as f32),
            letters: [' '; GROUP_SIZE as usize],
        }
    }

    /// Reset to the spawn position above column 0 with three fresh letters.
    pub fn respawn(&mut self, rng: &mut SimpleRng) {
        self.col = 0;
        self.y = -(GROUP_SIZE as f32);
        for letter in &mut self.letters {
            *letter = random_letter(rng);
        }
    }

    /// Rotate the letters: the bottom tile cycles to the top.
    /// [a, b, c] -> [c, a, b]
    pub fn shuffle(&mut self) {
        let bottom = self.letters[2];
        self.letters[2] = self.letters[1];
        self.letters[1] = self.letters[0];
        self.letters[0] = bottom;
    }

    /// Grid row currently holding the group's bottom edge.
    ///
    /// Horizontal moves are blocked when this row is occupied in the
    /// destination column. Always >= 0 because y never goes below spawn.
    pub fn bottom_edge_row(&self) -> i8 {
        let row = (self.y + GROUP_SIZE as f32).floor() as i32;
        row.clamp(0, GRID_HEIGHT as i32) as i8
    }
}

impl Default for FallingGroup {
    fn default() -> Self {
        Self::new()
    }
}
