//! Level data: obstacle schedule plus the tuning it runs under
//!
//! Levels come from a small CSV table, one header row followed by rows of
//! `gap_center_fraction, gap_size_fraction, spawn_time_seconds`. Fractions are
//! relative to the view height.

use std::fmt;
use std::path::Path;

use crate::sim::state::{GameState, ObstacleSpec};
use crate::tuning::{Tuning, TuningError};

/// Immutable context bound to a running game
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Sorted by spawn time
    specs: Vec<ObstacleSpec>,
    /// Validated on construction
    tuning: Tuning,
    /// Seed for the canonical initial state
    pub seed: u64,
}

impl Level {
    /// Bind a schedule to its tuning; the reducer relies on the tuning being valid
    pub fn new(
        mut specs: Vec<ObstacleSpec>,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        // Stable, so rows with equal times keep file order
        specs.sort_by_key(|s| s.spawn_time_ms);
        Ok(Self {
            specs,
            tuning,
            seed,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn specs(&self) -> &[ObstacleSpec] {
        &self.specs
    }

    /// The state every game starts from, and every restart returns to
    pub fn initial_state(&self) -> GameState {
        GameState::new(&self.tuning, self.seed)
    }

    /// Specs that fire on the tick moving elapsed time from `prev_ms` to `now_ms`
    ///
    /// The window is `(prev_ms, now_ms]`, except that a spawn time of zero
    /// also fires on the very first tick.
    pub fn specs_due(&self, prev_ms: u64, now_ms: u64) -> impl Iterator<Item = &ObstacleSpec> {
        self.specs.iter().filter(move |s| {
            let after_prev = s.spawn_time_ms > prev_ms || (prev_ms == 0 && s.spawn_time_ms == 0);
            after_prev && s.spawn_time_ms <= now_ms
        })
    }

    /// Every obstacle in the level has spawned by `now_ms`
    pub fn all_spawned_by(&self, now_ms: u64) -> bool {
        self.specs.last().is_none_or(|s| s.spawn_time_ms <= now_ms)
    }
}

/// Loader failure, with the 1-based line it happened on
#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    /// No header row
    Empty,
    FieldCount { line: usize, found: usize },
    BadNumber { line: usize, field: &'static str, value: String },
    OutOfRange { line: usize, field: &'static str, value: f64 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read level: {e}"),
            Self::Empty => write!(f, "level data is empty"),
            Self::FieldCount { line, found } => {
                write!(f, "line {line}: expected 3 fields, found {found}")
            }
            Self::BadNumber { line, field, value } => {
                write!(f, "line {line}: {field} is not a number: {value:?}")
            }
            Self::OutOfRange { line, field, value } => {
                write!(f, "line {line}: {field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

const FIELDS: [&str; 3] = ["gap_center", "gap_size", "spawn_time"];

/// Parse level CSV into specs scaled for `tuning`'s view
pub fn parse_csv(text: &str, tuning: &Tuning) -> Result<Vec<ObstacleSpec>, LevelError> {
    let mut rows = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    // Header names are not checked
    if rows.next().is_none() {
        return Err(LevelError::Empty);
    }

    let mut specs = Vec::new();
    for (line, row) in rows {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() != FIELDS.len() {
            return Err(LevelError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let mut values = [0.0f64; 3];
        for (slot, (raw, field)) in values.iter_mut().zip(fields.iter().zip(FIELDS)) {
            *slot = raw.parse::<f64>().map_err(|_| LevelError::BadNumber {
                line,
                field,
                value: raw.to_string(),
            })?;
        }
        let [center, size, seconds] = values;

        for (field, value) in [(FIELDS[0], center), (FIELDS[1], size)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LevelError::OutOfRange { line, field, value });
            }
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(LevelError::OutOfRange {
                line,
                field: FIELDS[2],
                value: seconds,
            });
        }

        specs.push(ObstacleSpec {
            gap_center: (center * tuning.view_height as f64) as f32,
            gap_size: (size * tuning.view_height as f64) as f32,
            spawn_time_ms: (seconds * 1000.0).round() as u64,
        });
    }

    Ok(specs)
}

/// Read and parse a level file
pub fn load_file(path: impl AsRef<Path>, tuning: &Tuning) -> Result<Vec<ObstacleSpec>, LevelError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(LevelError::Io)?;
    let specs = parse_csv(&text, tuning)?;
    log::info!("Loaded {} obstacles from {}", specs.len(), path.display());
    Ok(specs)
}
