//! Game state and core simulation types

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board laid out, waiting for a start command
    Ready,
    /// Active gameplay, steps advance
    Running,
    /// Game is paused; all state preserved, no steps
    Paused,
    /// Run ended by a wall or self collision
    GameOver,
    /// Snake fills the entire board; nowhere left to spawn food
    BoardFull,
}

impl GamePhase {
    /// Terminal phases stay put until an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::BoardFull)
    }
}

/// A cell on the grid. Signed so a head computed one step past the edge
/// can be represented before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in the given direction
    pub fn offset(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether this cell lies on the board
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Movement direction, one grid cell per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in grid coordinates (y grows downward)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact reverse of this direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Complete game state. Mutated only by the stepping operation and the
/// two input entry points below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Snake segments, head first
    pub snake: VecDeque<Position>,
    /// Direction the snake moved on the last step
    pub direction: Direction,
    /// Most recently accepted intent, adopted at the start of the next step
    pub pending_direction: Direction,
    /// Current food cell; None only in Ready and BoardFull
    pub food: Option<Position>,
    /// Score
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Steps taken since the last reset
    pub steps: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Ready-phase board: snake at the fixed start, heading right, no food.
    /// Head is the highest-x segment so the first step moves into open space.
    pub fn new() -> Self {
        let len = INITIAL_SNAKE_LENGTH;
        let snake: VecDeque<Position> = (0..len)
            .map(|i| Position::new(SNAKE_START_X + (len - 1 - i) as i32, SNAKE_START_Y))
            .collect();

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            phase: GamePhase::Ready,
            steps: 0,
        }
    }

    /// The head segment
    pub fn head(&self) -> Position {
        *self.snake.front().expect("snake is never empty")
    }

    /// Whether any snake segment occupies the cell
    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    /// Record a directional intent. Reversing straight into the body is
    /// rejected; the latest accepted intent overwrites any earlier one.
    pub fn set_pending_direction(&mut self, dir: Direction) {
        if dir == self.direction.opposite() {
            return;
        }
        self.pending_direction = dir;
    }

    /// Flip Running/Paused. Ready and terminal phases are unaffected.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_layout() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.snake.len(), INITIAL_SNAKE_LENGTH);
        assert_eq!(state.head(), Position::new(6, 4));
        assert_eq!(state.snake[1], Position::new(5, 4));
        assert_eq!(state.snake[2], Position::new(4, 4));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(state.food.is_none());
    }

    #[test]
    fn test_reversal_rejected() {
        let mut state = GameState::new();
        state.set_pending_direction(Direction::Left);
        assert_eq!(state.pending_direction, Direction::Right);

        // Perpendicular turns are accepted, repeats are idempotent
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.pending_direction, Direction::Up);
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.pending_direction, Direction::Up);
    }

    #[test]
    fn test_latest_intent_wins() {
        let mut state = GameState::new();
        state.set_pending_direction(Direction::Up);
        state.set_pending_direction(Direction::Down);
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut state = GameState::new();
        state.phase = GamePhase::Running;
        let before = state.clone();

        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snake, before.snake);
        assert_eq!(state.score, before.score);
    }

    #[test]
    fn test_pause_noop_outside_play() {
        for phase in [GamePhase::Ready, GamePhase::GameOver, GamePhase::BoardFull] {
            let mut state = GameState::new();
            state.phase = phase;
            state.toggle_pause();
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_direction_opposites() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
