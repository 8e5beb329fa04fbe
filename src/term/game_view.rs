//! GameView: maps session state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FallingGroup, GameSession, Grid, WordMatch};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Stage, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// Palette lifted from the game's original skin.
const COLOR_BACKGROUND: Rgb = Rgb::new(72, 61, 139); // slate blue
const COLOR_BORDER: Rgb = Rgb::new(106, 90, 205); // dark slate blue
const COLOR_TILE_BODY: Rgb = Rgb::new(255, 239, 213); // papaya whip
const COLOR_TILE_BORDER: Rgb = Rgb::new(255, 140, 0); // dark orange
const COLOR_FLASH_A: Rgb = Rgb::new(0, 0, 0); // black
const COLOR_FLASH_B: Rgb = Rgb::new(220, 220, 220); // gainsboro
const COLOR_GAME_OVER: Rgb = Rgb::new(220, 20, 60); // crimson
const COLOR_SPLASH_TEXT: Rgb = Rgb::new(182, 144, 250);

/// A lightweight terminal renderer for the word-drop well.
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    /// Well cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session's current stage into a framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        match session.stage() {
            Stage::Splash => self.render_splash(session.last_score(), viewport),
            Stage::Playing => {
                self.render_playing(session.grid(), session.group(), session.score(), viewport)
            }
            Stage::GameOver => self.render_game_over(session.grid(), session.group(), viewport),
        }
    }

    /// Splash screen: the title on a fresh launch, the final score after a
    /// finished game.
    pub fn render_splash(&self, last_score: Option<u32>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let bg = style(COLOR_SPLASH_TEXT, COLOR_BACKGROUND, false);
        fb.clear(bg.into_cell(' '));

        let title = style(COLOR_SPLASH_TEXT, COLOR_BACKGROUND, true);
        match last_score {
            None => {
                self.put_centered(&mut fb, viewport.height / 5, "L E T R I S", title);
                self.put_centered(
                    &mut fb,
                    viewport.height * 7 / 10,
                    "press enter to start",
                    bg,
                );
            }
            Some(score) => {
                self.put_centered(&mut fb, viewport.height / 5, "you cleared", bg);
                self.put_centered(&mut fb, viewport.height * 3 / 10, &format!("{}", score), title);
                self.put_centered(&mut fb, viewport.height / 2, "blocks", bg);
                self.put_centered(&mut fb, viewport.height * 4 / 5, "try again?", bg);
            }
        }
        fb
    }

    /// The well mid-game: placed tiles, the falling group, and the score.
    pub fn render_playing(
        &self,
        grid: &Grid,
        group: &FallingGroup,
        score: u32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = self.well_frame(grid, COLOR_BACKGROUND, viewport);
        self.draw_group(&mut fb, group, viewport);
        self.draw_score(&mut fb, score, viewport);
        fb
    }

    /// One frame of the word-clear flash: matched cells alternate between the
    /// two flash palettes by frame parity.
    pub fn render_flash(
        &self,
        grid: &Grid,
        found: &WordMatch,
        frame: u32,
        score: u32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = self.well_frame(grid, COLOR_BACKGROUND, viewport);

        let (body, edge) = if frame % 2 == 0 {
            (COLOR_FLASH_B, COLOR_FLASH_A)
        } else {
            (COLOR_FLASH_A, COLOR_FLASH_B)
        };

        let (start_x, start_y) = self.well_origin(viewport);
        for (i, letter) in found.word.chars().enumerate() {
            let col = found.start as u16 + i as u16;
            self.draw_tile_at(
                &mut fb,
                start_x,
                start_y,
                col,
                found.row as u16,
                letter,
                body,
                edge,
            );
        }
        self.draw_score(&mut fb, score, viewport);
        fb
    }

    /// The final board and the stranded group on the game-over background.
    pub fn render_game_over(
        &self,
        grid: &Grid,
        group: &FallingGroup,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = self.well_frame(grid, COLOR_GAME_OVER, viewport);
        self.draw_group(&mut fb, group, viewport);
        fb
    }

    /// Background, border and all placed tiles.
    fn well_frame(&self, grid: &Grid, background: Rgb, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(style(COLOR_BORDER, background, false).into_cell(' '));

        let (start_x, start_y) = self.well_origin(viewport);
        let well_w = GRID_WIDTH as u16 * self.cell_w;
        let well_h = GRID_HEIGHT as u16 * self.cell_h;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            well_w,
            well_h,
            ' ',
            style(COLOR_BORDER, background, false),
        );
        self.draw_border(&mut fb, start_x, start_y, well_w + 2, well_h + 2);

        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                if let Some(Some(letter)) = grid.get(row, col) {
                    self.draw_tile_at(
                        &mut fb,
                        start_x,
                        start_y,
                        col as u16,
                        row as u16,
                        letter,
                        COLOR_TILE_BODY,
                        COLOR_TILE_BORDER,
                    );
                }
            }
        }
        fb
    }

    /// Top-left terminal coordinate of the well border.
    fn well_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 * self.cell_h + 2;
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// The falling group at its continuous vertical position, clipped at the
    /// top of the well.
    fn draw_group(&self, fb: &mut FrameBuffer, group: &FallingGroup, viewport: Viewport) {
        let (start_x, start_y) = self.well_origin(viewport);
        for (i, &letter) in group.letters.iter().enumerate() {
            if letter == ' ' {
                continue;
            }
            let tile_y = group.y + i as f32;
            let row = tile_y.floor() as i32;
            if row < 0 || row >= GRID_HEIGHT as i32 {
                continue;
            }
            self.draw_tile_at(
                fb,
                start_x,
                start_y,
                group.col as u16,
                row as u16,
                letter,
                COLOR_TILE_BODY,
                COLOR_TILE_BORDER,
            );
        }
    }

    fn draw_tile_at(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        letter: char,
        body: Rgb,
        edge: Rgb,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style(edge, body, false));
        // Letter sits in the middle of the tile's first row.
        let letter_x = px + self.cell_w / 2;
        let letter_upper = letter.to_ascii_uppercase();
        fb.put_char(letter_x.saturating_sub(1), py, letter_upper, style(edge, body, true));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let s = style(COLOR_TILE_BORDER, COLOR_BACKGROUND, false);

        fb.put_char(x, y, '┌', s);
        fb.put_char(x + w - 1, y, '┐', s);
        fb.put_char(x, y + h - 1, '└', s);
        fb.put_char(x + w - 1, y + h - 1, '┘', s);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', s);
            fb.put_char(x + dx, y + h - 1, '─', s);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', s);
            fb.put_char(x + w - 1, y + dy, '│', s);
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u32, viewport: Viewport) {
        let (start_x, start_y) = self.well_origin(viewport);
        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        fb.put_str(
            panel_x,
            start_y,
            "SCORE",
            style(COLOR_SPLASH_TEXT, COLOR_BACKGROUND, true),
        );
        fb.put_str(
            panel_x,
            start_y + 1,
            &format!("{}", score),
            style(COLOR_SPLASH_TEXT, COLOR_BACKGROUND, false),
        );
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, s: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = fb.width().saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, s);
    }
}

const fn style(fg: Rgb, bg: Rgb, bold: bool) -> CellStyle {
    CellStyle {
        fg,
        bg,
        bold,
        dim: false,
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::term::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::term::fb::Cell {
        crate::term::fb::Cell { ch, style: self }
    }
}
