//! The single owner of the current game state
//!
//! Hosts feed events in arrival order; each one is fully applied before the
//! next. Transitions worth knowing about are logged here rather than in the
//! reducer.

use super::state::{GameEvent, GameState};
use super::tick::advance;
use crate::level::Level;

pub struct Session {
    level: Level,
    state: GameState,
}

impl Session {
    pub fn new(level: Level) -> Self {
        let state = level.initial_state();
        log::info!(
            "Session ready: {} obstacles, seed {}",
            level.specs().len(),
            level.seed
        );
        Self { level, state }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one event and return the new snapshot
    pub fn apply(&mut self, event: GameEvent) -> &GameState {
        let next = advance(&self.level, &self.state, event);
        log_transition(&self.state, &next, event);
        self.state = next;
        &self.state
    }

    /// Apply a whole event sequence, returning the final snapshot
    pub fn replay<I>(&mut self, events: I) -> &GameState
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            self.apply(event);
        }
        &self.state
    }
}

fn log_transition(prev: &GameState, next: &GameState, event: GameEvent) {
    if event == GameEvent::Restart {
        log::info!("Restarted (previous score {})", prev.score);
        return;
    }
    if next.lives < prev.lives {
        log::info!(
            "Crash at {} ms, {} lives left",
            next.elapsed_ms,
            next.lives
        );
    }
    if next.score > prev.score {
        log::debug!("Score {}", next.score);
    }
    if next.ended && !prev.ended {
        if next.won {
            log::info!("Level cleared with score {}", next.score);
        } else {
            log::info!("Game over with score {}", next.score);
        }
    }
}
