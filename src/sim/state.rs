//! Game state and core simulation types
//!
//! Everything a snapshot needs for rendering and replay lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Time-indexed definition of one obstacle, before it is on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Vertical centre of the gap
    pub gap_center: f32,
    /// Vertical extent of the gap
    pub gap_size: f32,
    /// Elapsed time at which the obstacle enters from the right
    pub spawn_time_ms: u64,
}

/// An obstacle scrolling across the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub gap_center: f32,
    pub gap_size: f32,
    /// Set once the actor has passed it
    pub scored: bool,
}

impl Obstacle {
    /// Place a newly due obstacle at the right edge of the view
    pub fn spawn(spec: &ObstacleSpec, view_width: f32) -> Self {
        Self {
            x: view_width,
            gap_center: spec.gap_center,
            gap_size: spec.gap_size,
            scored: false,
        }
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_size / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_size / 2.0
    }

    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Shifted copy, used when replacing the obstacle set each tick
    pub fn shifted(&self, dx: f32) -> Self {
        Self {
            x: self.x - dx,
            ..*self
        }
    }
}

/// One discrete input to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fixed time quantum elapsed
    Tick,
    /// Player pressed the flap key
    Flap,
    /// Player asked for a fresh game
    Restart,
}

/// Complete game state (deterministic, serializable)
///
/// Snapshots are replaced wholesale by `advance`; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Terminal flag; physics keeps running but obstacles freeze
    pub ended: bool,
    /// Top edge of the actor
    pub position_y: f32,
    pub velocity_y: f32,
    pub lives: u8,
    pub score: u32,
    /// Newest first, so `x` is non-increasing
    pub obstacles: Vec<Obstacle>,
    pub elapsed_ms: u64,
    /// A collision was active on this tick
    pub just_crashed: bool,
    pub won: bool,
    /// Bounce RNG, part of the state so replays are exact
    pub rng: Pcg32,
}

impl GameState {
    /// Canonical initial state for the given tuning and seed
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            ended: false,
            position_y: tuning.actor_start_y,
            velocity_y: 0.0,
            lives: tuning.start_lives,
            score: 0,
            obstacles: Vec::new(),
            elapsed_ms: 0,
            just_crashed: false,
            won: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Vertical centre of the actor
    pub fn actor_center_y(&self, tuning: &Tuning) -> f32 {
        self.position_y + tuning.actor_size / 2.0
    }

    /// True once all lives are gone (as opposed to a win)
    pub fn is_game_over(&self) -> bool {
        self.ended && !self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_canonical() {
        let tuning = Tuning::default();
        let a = GameState::new(&tuning, 7);
        let b = GameState::new(&tuning, 7);
        assert_eq!(a, b);
        assert_eq!(a.lives, 3);
        assert!(!a.ended);
        assert!(a.obstacles.is_empty());
    }

    #[test]
    fn test_gap_edges() {
        let spec = ObstacleSpec {
            gap_center: 200.0,
            gap_size: 100.0,
            spawn_time_ms: 0,
        };
        let obstacle = Obstacle::spawn(&spec, 600.0);
        assert_eq!(obstacle.x, 600.0);
        assert_eq!(obstacle.gap_top(), 150.0);
        assert_eq!(obstacle.gap_bottom(), 250.0);
        assert!(!obstacle.scored);
        assert_eq!(obstacle.shifted(3.0).x, 597.0);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(&Tuning::default(), 42);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
