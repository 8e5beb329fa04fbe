//! GameSession - owns all state for one play-through and routes every
//! mutation through session methods (no ambient globals).

use crate::core::dict::Dictionary;
use crate::core::engine::{EngineObserver, SimulationEngine, TickOutcome};
use crate::core::falling::FallingGroup;
use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{
    GameIntent, ShiftDirection, Stage, BASE_DROP_SPEED, FAST_DROP_SPEED, GRID_WIDTH,
};

/// One play session: splash -> playing -> game over -> splash.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    group: FallingGroup,
    rng: SimpleRng,
    dict: Dictionary,
    score: u32,
    stage: Stage,
    drop_speed: f32,
    /// Score of the most recently finished game, shown on the splash screen.
    last_score: Option<u32>,
}

impl GameSession {
    pub fn new(dict: Dictionary, seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            group: FallingGroup::new(),
            rng: SimpleRng::new(seed),
            dict,
            score: 0,
            stage: Stage::Splash,
            drop_speed: BASE_DROP_SPEED,
            last_score: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn group(&self) -> &FallingGroup {
        &self.group
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Begin a game from the splash screen.
    pub fn start(&mut self) {
        if self.stage != Stage::Splash {
            return;
        }
        self.grid.clear();
        self.score = 0;
        self.drop_speed = BASE_DROP_SPEED;
        self.group.respawn(&mut self.rng);
        self.stage = Stage::Playing;
    }

    /// Move the falling group one column left or right.
    ///
    /// Silently refused when the destination leaves the grid or the cell at
    /// the group's current bottom-edge row is already occupied.
    pub fn handle_shift(&mut self, direction: ShiftDirection) -> bool {
        if self.stage != Stage::Playing {
            return false;
        }

        let dest = self.group.col + direction.delta();
        if dest < 0 || dest >= GRID_WIDTH {
            return false;
        }
        if self.grid.is_occupied(self.group.bottom_edge_row(), dest) {
            return false;
        }

        self.group.col = dest;
        true
    }

    /// Rotate the three falling letters.
    pub fn handle_shuffle(&mut self) {
        if self.stage != Stage::Playing {
            return;
        }
        self.group.shuffle();
    }

    /// Toggle accelerated descent.
    pub fn handle_fast_drop(&mut self, on: bool) {
        self.drop_speed = if on { FAST_DROP_SPEED } else { BASE_DROP_SPEED };
    }

    /// Dispatch a discrete player intent.
    pub fn apply_intent(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::Start => self.start(),
            GameIntent::ShiftLeft => {
                self.handle_shift(ShiftDirection::Left);
            }
            GameIntent::ShiftRight => {
                self.handle_shift(ShiftDirection::Right);
            }
            GameIntent::Shuffle => self.handle_shuffle(),
            GameIntent::FastDropOn => self.handle_fast_drop(true),
            GameIntent::FastDropOff => self.handle_fast_drop(false),
        }
    }

    /// Advance the simulation by `elapsed_ms`. No-op outside of play.
    ///
    /// On game over the session keeps the final grid and stranded group for
    /// the renderer; call `conclude` once the game-over display is done.
    pub fn tick(&mut self, elapsed_ms: u32, observer: &mut dyn EngineObserver) -> TickOutcome {
        if self.stage != Stage::Playing {
            return TickOutcome::Falling;
        }

        let mut engine = SimulationEngine {
            grid: &mut self.grid,
            group: &mut self.group,
            score: &mut self.score,
            rng: &mut self.rng,
            dict: &self.dict,
        };
        let outcome = engine.advance(elapsed_ms, self.drop_speed, observer);

        if outcome == TickOutcome::GameOver {
            self.last_score = Some(self.score);
            self.stage = Stage::GameOver;
        }

        outcome
    }

    /// Return to the splash screen after the game-over display pause.
    pub fn conclude(&mut self) {
        if self.stage != Stage::GameOver {
            return;
        }
        self.grid.clear();
        self.group = FallingGroup::new();
        self.score = 0;
        self.drop_speed = BASE_DROP_SPEED;
        self.stage = Stage::Splash;
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub fn group_mut(&mut self) -> &mut FallingGroup {
        &mut self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::NullObserver;
    use crate::types::{GRID_HEIGHT, Tile};

    fn session() -> GameSession {
        GameSession::new(Dictionary::from_text("cat dog art cart").unwrap(), 12345)
    }

    #[test]
    fn test_new_session_is_splash() {
        let s = session();
        assert_eq!(s.stage(), Stage::Splash);
        assert_eq!(s.score(), 0);
        assert_eq!(s.last_score(), None);
        assert!(s.grid().cells().iter().all(Tile::is_none));
    }

    #[test]
    fn test_start_transitions_to_playing() {
        let mut s = session();
        s.start();
        assert_eq!(s.stage(), Stage::Playing);
        assert_eq!(s.group().col, 0);
        assert_eq!(s.group().y, -3.0);
        assert!(s.group().letters.iter().all(|c| c.is_ascii_lowercase()));

        // Starting again mid-game is a no-op.
        let letters = s.group().letters;
        s.start();
        assert_eq!(s.group().letters, letters);
    }

    #[test]
    fn test_shift_bounds() {
        let mut s = session();
        s.start();

        // At column 0 a left shift is refused.
        assert!(!s.handle_shift(ShiftDirection::Left));
        assert_eq!(s.group().col, 0);

        // Walk right to the far wall.
        for _ in 0..GRID_WIDTH {
            s.handle_shift(ShiftDirection::Right);
        }
        assert_eq!(s.group().col, GRID_WIDTH - 1);
        assert!(!s.handle_shift(ShiftDirection::Right));
    }

    #[test]
    fn test_shift_blocked_by_occupied_cell() {
        let mut s = session();
        s.start();

        // Group bottom edge is at row 0 right after spawn; block (0, 1).
        s.grid_mut().set(0, 1, Some('x'));
        assert!(!s.handle_shift(ShiftDirection::Right));
        assert_eq!(s.group().col, 0);

        // Unblock and the same shift succeeds.
        s.grid_mut().set(0, 1, None);
        assert!(s.handle_shift(ShiftDirection::Right));
        assert_eq!(s.group().col, 1);
    }

    #[test]
    fn test_inputs_ignored_on_splash() {
        let mut s = session();
        assert!(!s.handle_shift(ShiftDirection::Right));
        s.handle_shuffle();
        assert_eq!(s.group().letters, [' ', ' ', ' ']);
    }

    #[test]
    fn test_fast_drop_speed() {
        let mut s = session();
        s.start();
        let y0 = s.group().y;
        s.apply_intent(GameIntent::FastDropOn);
        s.tick(1000, &mut NullObserver);
        assert_eq!(s.group().y, y0 + FAST_DROP_SPEED);

        let y1 = s.group().y;
        s.apply_intent(GameIntent::FastDropOff);
        s.tick(1000, &mut NullObserver);
        assert_eq!(s.group().y, y1 + BASE_DROP_SPEED);
    }

    #[test]
    fn test_tick_is_noop_on_splash() {
        let mut s = session();
        assert_eq!(s.tick(1000, &mut NullObserver), TickOutcome::Falling);
        assert_eq!(s.group().y, -3.0);
    }

    #[test]
    fn test_game_over_flow() {
        let mut s = session();
        s.start();
        // Fill column 0 ten tall so the next landing overflows.
        for row in 2..GRID_HEIGHT {
            s.grid_mut().set(row, 0, Some('x'));
        }
        s.grid_mut().set(11, 1, Some('y'));
        s.group_mut().y = 1.0;

        // Enough elapsed time to reach the stack.
        let outcome = s.tick(2000, &mut NullObserver);
        assert_eq!(outcome, TickOutcome::GameOver);
        assert_eq!(s.stage(), Stage::GameOver);
        assert_eq!(s.last_score(), Some(0));
        // Final grid preserved for the renderer.
        assert!(s.grid().is_occupied(2, 0));

        s.conclude();
        assert_eq!(s.stage(), Stage::Splash);
        assert_eq!(s.score(), 0);
        assert!(s.grid().cells().iter().all(Tile::is_none));
        // Last score survives the reset for the splash screen.
        assert_eq!(s.last_score(), Some(0));
    }

    #[test]
    fn test_conclude_outside_game_over_is_noop() {
        let mut s = session();
        s.start();
        s.conclude();
        assert_eq!(s.stage(), Stage::Playing);
    }

    #[test]
    fn test_landing_merges_and_respawns() {
        let mut s = session();
        s.start();
        s.group_mut().letters = ['t', 'm', 'b'];
        s.group_mut().col = 3;
        s.group_mut().y = 8.9;

        let outcome = s.tick(200, &mut NullObserver);
        assert_eq!(outcome, TickOutcome::Landed { words_cleared: 0 });
        assert_eq!(s.grid().get(11, 3), Some(Some('b')));
        assert_eq!(s.group().col, 0);
        assert_eq!(s.group().y, -3.0);
    }
}
