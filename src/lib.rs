//! Frogger - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, reducer)
//! - `session`: Owns the current snapshot and folds events into it
//! - `input`: Key latch and fixed-interval clock that produce events
//! - `render`: Text frame of a snapshot
//! - `highscores`: In-memory leaderboard
//! - `settings`: Runtime configuration

pub mod highscores;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{Observer, Session};
pub use settings::Settings;
pub use sim::{GameEvent, GameState, apply, reduce};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 650.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Side of one grid tile; the frog moves one tile per step
    pub const TILE: f32 = 50.0;

    /// Default clock interval between ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Number of seeded rows in the starting layout
    pub const LAYOUT_ROWS: usize = 10;

    /// Frog start and movement bounds
    pub const FROG_START_X: f32 = 300.0;
    pub const FROG_START_Y: f32 = 550.0;
    pub const FROG_MIN_X: f32 = 0.0;
    pub const FROG_MAX_X: f32 = 600.0;
    pub const FROG_MAX_Y: f32 = 550.0;

    /// Road: first hazard lane is row 7 (y = 350), four lanes, lane 1 is safe
    pub const HAZARD_FIRST_ROW: usize = 7;
    pub const HAZARD_LANES: usize = 4;
    pub const SAFE_LANE: usize = 1;
    pub const CAR_SPEED: f32 = 15.0;
    pub const TRUCK_SPEED: f32 = 5.0;

    /// River: six platform lanes starting at row 1 (y = 50)
    pub const PLATFORM_FIRST_ROW: usize = 1;
    pub const PLATFORM_LANES: usize = 6;
    pub const PLATFORM_COLUMNS: [usize; 6] = [1, 2, 3, 7, 8, 9];
    pub const PLATFORM_SPEED: f32 = 3.0;

    /// Top row targets
    pub const SCORE_ZONE_COUNT: usize = 5;
    pub const SCORE_ZONE_SPACING: f32 = 150.0;
    /// Horizontal tolerance for reaching a zone or passing its gap
    pub const SCORE_ZONE_TOLERANCE: f32 = 10.0;
    pub const SCORE_AWARD: u64 = 100;

    pub const TELEPORTER_COUNT: usize = 2;
    /// Platform the collectible spawns on
    pub const COLLECTIBLE_PLATFORM: usize = 2;

    /// Entities wrap once they pass this far beyond either canvas edge
    pub const WRAP_MARGIN: f32 = 50.0;
    /// Extra speed per difficulty level
    pub const DIFFICULTY_SPEEDUP: f32 = 3.0;

    /// River occupies rows with 50 <= y < 350
    pub const RIVER_TOP_Y: f32 = 50.0;
    pub const RIVER_BOTTOM_Y: f32 = 350.0;

    /// Contact distances
    pub const HAZARD_REACH: f32 = 50.0;
    pub const PLATFORM_REACH: f32 = 25.0;
    pub const COLLECTIBLE_REACH: f32 = 50.0;
}
