//! Letris terminal runner (default binary).
//!
//! Drives the session with a wall-clock-paced tick loop: render, poll input
//! until the next tick, apply intents, advance the simulation. Word-clear
//! flashes and the game-over pause block here, in the frontend, never in
//! the core.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use letris::core::{Dictionary, EngineObserver, GameSession, Grid, TickOutcome, WordMatch};
use letris::input::{should_quit, InputHandler};
use letris::term::{GameView, TerminalRenderer, Viewport};
use letris::types::{FLASH_COUNT, FLASH_FRAME_MS, GAME_OVER_PAUSE_MS, TICK_MS};

fn main() -> Result<()> {
    let dict = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading word list {}", path))?;
            Dictionary::from_text(&text).with_context(|| format!("parsing word list {}", path))?
        }
        None => Dictionary::builtin()?,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, dict);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Plays the word-clear flash animation between engine steps.
///
/// Runs inside the tick (cooperatively blocking); the engine itself never
/// sleeps.
struct FlashAnimator<'a> {
    term: &'a mut TerminalRenderer,
    view: &'a GameView,
    viewport: Viewport,
    score_hint: u32,
}

impl EngineObserver for FlashAnimator<'_> {
    fn word_matched(&mut self, grid: &Grid, found: &WordMatch) {
        self.score_hint += found.word.len() as u32;
        for frame in 0..FLASH_COUNT {
            let fb = self
                .view
                .render_flash(grid, found, frame, self.score_hint, self.viewport);
            if self.term.draw(&fb).is_err() {
                break;
            }
            std::thread::sleep(Duration::from_millis(FLASH_FRAME_MS));
        }
    }
}

fn run(term: &mut TerminalRenderer, dict: Dictionary) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::new(dict, seed);

    let view = GameView::default();
    let mut input_handler = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(intent) = input_handler.handle_key_press(key.code) {
                            session.apply_intent(intent);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(intent) = input_handler.handle_key_release(key.code) {
                            session.apply_intent(intent);
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick, scaled by measured wall-clock time.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = last_tick.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
            last_tick = Instant::now();

            for intent in input_handler.update(elapsed_ms) {
                session.apply_intent(intent);
            }

            let mut animator = FlashAnimator {
                term: &mut *term,
                view: &view,
                viewport: Viewport::new(w, h),
                score_hint: session.score(),
            };
            let outcome = session.tick(elapsed_ms, &mut animator);

            if outcome == TickOutcome::GameOver {
                // Show the stranded group on the crimson board, then return
                // to the splash screen with the final score.
                let fb = view.render(&session, Viewport::new(w, h));
                term.draw(&fb)?;
                std::thread::sleep(Duration::from_millis(GAME_OVER_PAUSE_MS));
                session.conclude();
                input_handler.reset();
                // Flash/pause frames make the next delta meaningless.
                last_tick = Instant::now();
            } else if matches!(outcome, TickOutcome::Landed { words_cleared } if words_cleared > 0)
            {
                last_tick = Instant::now();
            }
        }
    }
}
