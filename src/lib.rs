//! Grid Snake - a classic snake game on a fixed square grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid stepping, collisions, food, score)
//! - `scheduler`: Converts a continuous time signal into discrete steps
//! - `input`: Control surface routing directional/pause/speed commands
//! - `highscore`: Best-score persistence (LocalStorage on web)
//! - `render`: Rendering seam plus the Canvas 2D implementation
//! - `theme`: Cosmetic color themes

pub mod highscore;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod sim;
pub mod theme;

pub use highscore::HighScore;
pub use scheduler::TickScheduler;
pub use theme::Theme;

/// Game configuration constants
pub mod consts {
    /// Board is a square grid of this many cells per axis
    pub const GRID_SIZE: i32 = 24;
    /// Snake length right after a reset
    pub const INITIAL_SNAKE_LENGTH: usize = 3;
    /// Score awarded per food consumed
    pub const FOOD_REWARD: u32 = 10;

    /// Fastest stepping interval (speed level 10)
    pub const MIN_INTERVAL_MS: f64 = 60.0;
    /// Slowest stepping interval (speed level 1)
    pub const MAX_INTERVAL_MS: f64 = 240.0;
    /// Speed level the scheduler starts at
    pub const DEFAULT_SPEED_LEVEL: u8 = 6;

    /// Tail cell of the initial snake; the body extends rightward from here
    pub const SNAKE_START_X: i32 = 4;
    pub const SNAKE_START_Y: i32 = 4;
}
