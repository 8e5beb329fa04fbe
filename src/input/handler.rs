//! Key-to-intent mapping for terminal environments.
//!
//! Fast drop is a held control, but many terminals never emit key release
//! events; a hold timeout turns the drop speed back down once the key has
//! gone quiet.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arrayvec::ArrayVec;

use crate::types::GameIntent;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained fast drop.
const DEFAULT_FAST_DROP_TIMEOUT_MS: u32 = 200;

/// Tracks fast-drop hold state between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    fast_drop_held: bool,
    last_down_press: std::time::Instant,
    fast_drop_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            fast_drop_held: false,
            last_down_press: std::time::Instant::now(),
            fast_drop_timeout_ms: DEFAULT_FAST_DROP_TIMEOUT_MS,
        }
    }

    pub fn with_fast_drop_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.fast_drop_timeout_ms = timeout_ms;
        self
    }

    pub fn fast_drop_held(&self) -> bool {
        self.fast_drop_held
    }

    /// Map a key press to an intent, if any.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameIntent> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(GameIntent::ShiftLeft)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(GameIntent::ShiftRight)
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameIntent::Shuffle),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.last_down_press = std::time::Instant::now();
                if self.fast_drop_held {
                    None
                } else {
                    self.fast_drop_held = true;
                    Some(GameIntent::FastDropOn)
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameIntent::Start),
            _ => None,
        }
    }

    /// Handle an explicit key release (terminals that report them).
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameIntent> {
        match code {
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                if self.fast_drop_held {
                    self.fast_drop_held = false;
                    Some(GameIntent::FastDropOff)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Per-tick update: auto-release fast drop when the key has gone quiet.
    pub fn update(&mut self, _elapsed_ms: u32) -> ArrayVec<GameIntent, 4> {
        let mut intents = ArrayVec::new();

        if self.fast_drop_held {
            let quiet_ms = self.last_down_press.elapsed().as_millis() as u32;
            if quiet_ms > self.fast_drop_timeout_ms {
                self.fast_drop_held = false;
                let _ = intents.try_push(GameIntent::FastDropOff);
            }
        }

        intents
    }

    pub fn reset(&mut self) {
        self.fast_drop_held = false;
        self.last_down_press = std::time::Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit keys: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    #[test]
    fn test_shift_and_shuffle_mapping() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameIntent::ShiftLeft));
        assert_eq!(
            ih.handle_key_press(KeyCode::Right),
            Some(GameIntent::ShiftRight)
        );
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(GameIntent::Shuffle));
        assert_eq!(ih.handle_key_press(KeyCode::Enter), Some(GameIntent::Start));
        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_fast_drop_press_is_edge_triggered() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Down),
            Some(GameIntent::FastDropOn)
        );
        // Held key repeats produce no duplicate intent.
        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert!(ih.fast_drop_held());
    }

    #[test]
    fn test_fast_drop_release() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(
            ih.handle_key_release(KeyCode::Down),
            Some(GameIntent::FastDropOff)
        );
        assert!(!ih.fast_drop_held());
        // Releasing again is a no-op.
        assert_eq!(ih.handle_key_release(KeyCode::Down), None);
    }

    #[test]
    fn test_fast_drop_auto_release_after_timeout() {
        let mut ih = InputHandler::new().with_fast_drop_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);

        // Simulate no further key events by moving the press into the past.
        ih.last_down_press = std::time::Instant::now() - std::time::Duration::from_millis(51);

        let intents = ih.update(16);
        assert_eq!(intents.as_slice(), &[GameIntent::FastDropOff]);
        assert!(!ih.fast_drop_held());
    }

    #[test]
    fn test_no_auto_release_while_key_repeats() {
        let mut ih = InputHandler::new().with_fast_drop_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        ih.handle_key_press(KeyCode::Down); // terminal auto-repeat
        assert!(ih.update(16).is_empty());
        assert!(ih.fast_drop_held());
    }

    #[test]
    fn test_should_quit() {
        let press = |code| KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(!should_quit(press(KeyCode::Char('c'))));

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert!(should_quit(ctrl_c));
    }
}
