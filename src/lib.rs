//! Gap Glider - a flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `level`: Obstacle data loading
//! - `tuning`: Data-driven game balance
//! - `platform`: Terminal event source
//! - `renderer`: Terminal rendering

pub mod level;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use level::{Level, LevelError};
pub use sim::{GameEvent, GameState, Session, advance};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical view dimensions (pixels, y grows downward)
    pub const VIEW_WIDTH: f32 = 600.0;
    pub const VIEW_HEIGHT: f32 = 400.0;

    /// Fixed simulation step (50 Hz)
    pub const TICK_MS: u64 = 20;

    /// Actor is a square; x is its fixed left edge
    pub const ACTOR_X: f32 = 120.0;
    pub const ACTOR_SIZE: f32 = 20.0;
    /// Top edge at start, centred vertically
    pub const ACTOR_START_Y: f32 = (VIEW_HEIGHT - ACTOR_SIZE) / 2.0;

    /// Velocity increment per tick
    pub const GRAVITY: f32 = 0.5;
    /// Downward speed cap
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_VELOCITY: f32 = -8.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_SPEED: f32 = 3.0;

    /// Bounce speed after a crash, sampled from [min, max)
    pub const BOUNCE_MIN: f32 = 3.0;
    pub const BOUNCE_MAX: f32 = 6.0;

    pub const START_LIVES: u8 = 3;
}
