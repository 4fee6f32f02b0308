//! Invariants over random levels and event sequences

use proptest::prelude::*;

use gap_glider::sim::ObstacleSpec;
use gap_glider::{GameEvent, GameState, Level, Tuning, advance};

fn spec_strategy() -> impl Strategy<Value = ObstacleSpec> {
    (40.0f32..360.0, 40.0f32..240.0, 0u64..6_000).prop_map(|(gap_center, gap_size, spawn)| {
        ObstacleSpec {
            gap_center,
            gap_size,
            spawn_time_ms: spawn,
        }
    })
}

fn level_strategy() -> impl Strategy<Value = Level> {
    (prop::collection::vec(spec_strategy(), 0..6), any::<u64>())
        .prop_map(|(specs, seed)| Level::new(specs, Tuning::default(), seed).unwrap())
}

fn event_strategy() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        12 => Just(GameEvent::Tick),
        3 => Just(GameEvent::Flap),
        1 => Just(GameEvent::Restart),
    ]
}

fn check_invariants(level: &Level, state: &GameState) {
    let tuning = level.tuning();
    assert_eq!(state.ended, state.lives == 0 || state.won);
    assert!(state.lives <= tuning.start_lives);
    assert!(state.score as usize <= level.specs().len());
    assert!(
        state.obstacles.windows(2).all(|w| w[0].x >= w[1].x),
        "obstacles out of order: {:?}",
        state.obstacles
    );
    assert!(state.obstacles.iter().all(|o| o.x > -tuning.pipe_width));
}

proptest! {
    #[test]
    fn invariants_hold_for_any_event_sequence(
        level in level_strategy(),
        events in prop::collection::vec(event_strategy(), 0..600),
    ) {
        let mut state = level.initial_state();
        check_invariants(&level, &state);

        for event in events {
            let next = advance(&level, &state, event);
            check_invariants(&level, &next);

            match event {
                GameEvent::Restart => prop_assert_eq!(&next, &level.initial_state()),
                GameEvent::Flap if state.ended => prop_assert_eq!(&next, &state),
                GameEvent::Flap => {
                    prop_assert_eq!(next.velocity_y, level.tuning().flap_velocity);
                    prop_assert_eq!(next.position_y, state.position_y);
                }
                GameEvent::Tick => {
                    prop_assert!(next.score >= state.score);
                    prop_assert!(next.lives + 1 >= state.lives);
                    let tick_ms = level.tuning().tick_ms;
                    prop_assert_eq!(next.elapsed_ms, state.elapsed_ms + tick_ms);
                    if state.ended {
                        prop_assert_eq!(&next.obstacles, &state.obstacles);
                        prop_assert_eq!(next.lives, state.lives);
                    }
                }
            }
            state = next;
        }
    }

    #[test]
    fn restart_from_anywhere_is_canonical(
        level in level_strategy(),
        ticks in 0usize..400,
    ) {
        let mut state = level.initial_state();
        for _ in 0..ticks {
            state = advance(&level, &state, GameEvent::Tick);
        }
        prop_assert_eq!(advance(&level, &state, GameEvent::Restart), level.initial_state());
    }

    #[test]
    fn continuous_contact_costs_one_life(level in level_strategy(), ticks in 1usize..50) {
        let tuning = level.tuning().clone();
        let mut state = level.initial_state();
        // Pin the actor past the bottom edge so the violation never lets up
        let mut lost = 0;
        for _ in 0..ticks {
            let pinned = GameState {
                position_y: tuning.view_height,
                velocity_y: 0.0,
                ..state.clone()
            };
            let next = advance(&level, &pinned, GameEvent::Tick);
            lost += (pinned.lives - next.lives) as usize;
            prop_assert!(next.just_crashed);
            state = next;
        }
        prop_assert_eq!(lost, 1);
    }
}
