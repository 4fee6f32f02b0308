//! Fixed timestep simulation tick
//!
//! `advance` is the only way a state changes. It is total over every event and
//! never touches the previous snapshot.

use rand::Rng;

use super::collision::{self, Boundary};
use super::state::{GameEvent, GameState, Obstacle};
use crate::level::Level;

/// Produce the state that follows `state` after `event`
pub fn advance(level: &Level, state: &GameState, event: GameEvent) -> GameState {
    match event {
        GameEvent::Tick => tick(level, state),
        GameEvent::Flap => flap(level, state),
        GameEvent::Restart => level.initial_state(),
    }
}

/// Set the upward flap velocity; position only moves on ticks
fn flap(level: &Level, state: &GameState) -> GameState {
    if state.ended {
        return state.clone();
    }
    GameState {
        velocity_y: level.tuning().flap_velocity,
        ..state.clone()
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(level: &Level, prev: &GameState) -> GameState {
    let tuning = level.tuning();

    // Kinematics run even after the game ends
    let mut velocity_y = (prev.velocity_y + tuning.gravity).min(tuning.max_fall_speed);
    let mut position_y = prev.position_y + velocity_y;
    let elapsed_ms = prev.elapsed_ms + tuning.tick_ms;

    let mut score = prev.score;
    let obstacles = if prev.ended {
        prev.obstacles.clone()
    } else {
        // Newest first keeps x non-increasing
        let spawned = level
            .specs_due(prev.elapsed_ms, elapsed_ms)
            .map(|spec| Obstacle::spawn(spec, tuning.view_width));
        let moved = prev.obstacles.iter().map(|o| o.shifted(tuning.pipe_speed));

        let mut merged: Vec<Obstacle> = spawned
            .chain(moved)
            .map(|mut o| {
                if !o.scored && collision::actor_passed(&o, tuning) {
                    o.scored = true;
                    score += 1;
                }
                o
            })
            .collect();
        // Scored before the filter, so the last visible tick still counts
        merged.retain(|o| !collision::off_screen(o, tuning.pipe_width));
        merged
    };

    let hit = collision::detect(position_y, &obstacles, tuning);
    let crashed = hit.hit() && !prev.just_crashed && !prev.ended;

    let mut lives = prev.lives;
    let mut rng = prev.rng.clone();
    if crashed {
        lives = lives.saturating_sub(1);
        position_y = collision::clamp_to_view(position_y, tuning);

        let downward = match hit.boundary {
            Some(Boundary::Top) => true,
            Some(Boundary::Bottom) => false,
            // Midpoint itself counts as the upper half
            None => position_y + tuning.actor_size / 2.0 > tuning.view_height / 2.0,
        };
        let speed = rng.random_range(tuning.bounce_min..tuning.bounce_max);
        velocity_y = if downward { speed } else { -speed };
    }

    let victory = !prev.ended && level.all_spawned_by(elapsed_ms) && obstacles.is_empty();
    let won = prev.won || victory;

    GameState {
        ended: prev.ended || lives == 0 || won,
        position_y,
        velocity_y,
        lives,
        score,
        obstacles,
        elapsed_ms,
        just_crashed: hit.hit(),
        won,
        rng,
    }
}
