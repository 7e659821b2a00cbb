//! Property tests over the core invariants.

use proptest::prelude::*;

use crate::decision::DecisionSynthesizer;
use crate::features::{project, ModelKind, ScalerSet};
use crate::models::{GameState, TeamSide};
use crate::simulator::{PlayCall, PlaySimulator};

prop_compose! {
    fn arb_state()(
        down in 1u8..=4,
        distance in 1u16..=25,
        yard_line_100 in 1i16..=99,
        quarter in 1u8..=5,
        quarter_seconds_remaining in 0u32..=900,
        game_seconds_remaining in 0u32..=3600,
        half_seconds_remaining in 0u32..=1800,
        score_home in 0u32..=60,
        score_away in 0u32..=60,
        possession in prop_oneof![Just(TeamSide::Home), Just(TeamSide::Away)],
        posteam_timeouts in 0u8..=3,
        defteam_timeouts in 0u8..=3,
        clock_running in any::<bool>(),
    ) -> GameState {
        GameState {
            down,
            distance,
            yard_line_100,
            quarter,
            quarter_seconds_remaining,
            game_seconds_remaining,
            half_seconds_remaining,
            score_home,
            score_away,
            possession,
            posteam_timeouts,
            defteam_timeouts,
            clock_running,
        }
    }
}

proptest! {
    #[test]
    fn derived_flags_are_functions_of_the_numeric_fields(state in arb_state()) {
        prop_assert_eq!(state.red_zone(), state.yard_line_100 <= 20);
        prop_assert_eq!(state.goal_to_go(), state.yard_line_100 <= 10);
        prop_assert_eq!(
            state.two_minute_drill(),
            state.game_seconds_remaining <= 120 && (state.quarter == 2 || state.quarter == 4)
        );
    }

    #[test]
    fn simulator_never_leaves_the_valid_state_space(
        state in arb_state(),
        seed in any::<u64>(),
        calls in proptest::collection::vec(
            prop_oneof![Just(PlayCall::Pass), Just(PlayCall::Run), Just(PlayCall::Punt)],
            1..6,
        ),
    ) {
        let mut sim = PlaySimulator::new(seed);
        let mut current = state;
        for call in calls {
            let (next, outcome) = sim.step(&current, call).unwrap();
            prop_assert!(next.validate().is_ok(), "invalid state after {:?}", outcome);
            prop_assert!(next.game_seconds_remaining <= current.game_seconds_remaining);
            prop_assert!(next.quarter_seconds_remaining <= current.quarter_seconds_remaining);
            current = next;
        }
    }

    #[test]
    fn projection_with_identity_scalers_reproduces_raw_fields(state in arb_state()) {
        let scalers = ScalerSet::identity();
        for kind in ModelKind::all() {
            let v = project(&state, kind, &scalers).unwrap();
            prop_assert_eq!(v.len(), kind.input_dim());
            // Spot-check the shared leading semantics: every table's fields
            // extract finite numbers.
            prop_assert!(v.as_slice().iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn classification_maps_always_sum_to_one(state in arb_state()) {
        let synth = DecisionSynthesizer::baseline();
        let offensive = synth.offensive(&state).unwrap();
        let personnel = synth.personnel(&state).unwrap();
        let sum_off: f64 = offensive.probabilities.values().sum();
        let sum_pers: f64 = personnel.probabilities.values().sum();
        // Reported maps are rounded to 4 decimals, so allow that slack.
        prop_assert!((sum_off - 1.0).abs() < 1e-3);
        prop_assert!((sum_pers - 1.0).abs() < 1e-3);
    }

    #[test]
    fn win_probability_stays_in_range_with_sane_leverage(state in arb_state()) {
        let synth = DecisionSynthesizer::baseline();
        let report = synth.win_probability(&state).unwrap();
        prop_assert!((0.0..=1.0).contains(&report.win_probability));
        prop_assert!(
            (report.win_probability + report.opponent_win_probability - 1.0).abs() < 1e-3
        );
    }
}
