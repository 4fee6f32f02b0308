//! Data-driven game balance
//!
//! Every physics constant the simulation reads lives here. A JSON file may
//! override any subset of fields; missing fields fall back to `consts`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and geometry for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === View ===
    pub view_width: f32,
    pub view_height: f32,

    // === Timing ===
    /// Fixed tick length in milliseconds
    pub tick_ms: u64,

    // === Actor ===
    pub actor_x: f32,
    pub actor_size: f32,
    pub actor_start_y: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub flap_velocity: f32,
    pub start_lives: u8,

    // === Obstacles ===
    pub pipe_width: f32,
    pub pipe_speed: f32,

    // === Crash response ===
    pub bounce_min: f32,
    pub bounce_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            tick_ms: TICK_MS,

            actor_x: ACTOR_X,
            actor_size: ACTOR_SIZE,
            actor_start_y: ACTOR_START_Y,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            flap_velocity: FLAP_VELOCITY,
            start_lives: START_LIVES,

            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,

            bounce_min: BOUNCE_MIN,
            bounce_max: BOUNCE_MAX,
        }
    }
}

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read tuning file: {e}"),
            Self::Json(e) => write!(f, "malformed tuning JSON: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(TuningError::Io)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("actor_size", self.actor_size),
            ("pipe_width", self.pipe_width),
            ("max_fall_speed", self.max_fall_speed),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        let finite = [
            ("actor_x", self.actor_x),
            ("actor_start_y", self.actor_start_y),
            ("gravity", self.gravity),
            ("flap_velocity", self.flap_velocity),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a finite number",
                });
            }
        }
        if self.tick_ms == 0 {
            return Err(TuningError::Invalid {
                field: "tick_ms",
                reason: "must be at least 1",
            });
        }
        if self.actor_size > self.view_height {
            return Err(TuningError::Invalid {
                field: "actor_size",
                reason: "actor must fit inside the view",
            });
        }
        if !(self.bounce_min.is_finite() && self.bounce_max.is_finite())
            || self.bounce_min < 0.0
            || self.bounce_min >= self.bounce_max
        {
            return Err(TuningError::Invalid {
                field: "bounce_min",
                reason: "bounce range must satisfy 0 <= min < max",
            });
        }
        if self.start_lives == 0 {
            return Err(TuningError::Invalid {
                field: "start_lives",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Lowest legal top edge for the actor
    pub fn actor_max_y(&self) -> f32 {
        self.view_height - self.actor_size
    }
}
