//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, carried in the state
//! - Stable obstacle order (newest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Boundary, CollisionResult};
pub use session::Session;
pub use state::{GameEvent, GameState, Obstacle, ObstacleSpec};
pub use tick::{advance, tick};
