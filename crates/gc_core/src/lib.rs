//! # gc_core - Sideline Decision Engine
//!
//! This library scores a football game situation with a set of prediction
//! models and reduces the scores into actionable coaching recommendations,
//! and it can advance a game forward by simulating the outcome of a chosen
//! play.
//!
//! ## Features
//! - Expected-value 4th-down policy over legal action candidates
//! - Offensive/defensive/personnel reads with formation decoration
//! - Win probability with leverage bucketing
//! - Deterministic play simulation (same seed = same drive)
//! - JSON API for easy integration with serving hosts

pub mod api;
pub mod decision;
pub mod error;
pub mod features;
pub mod formation;
pub mod models;
pub mod predictor;
pub mod scenarios;
pub mod simulator;

#[cfg(test)]
mod invariants_test;

// Re-export main API functions
pub use api::{
    decide_json, decide_kind_json, scenario_json, scenarios_json, simulate_play_json,
    DecideRequest, DecideResponse, SimulatePlayRequest, SimulatePlayResponse,
};
pub use error::{CoachError, Result};

// Re-export core decision types
pub use decision::{
    ActionCandidate, CombinedDecision, DecisionSynthesizer, DefensiveRecommendation,
    FourthDownAction, FourthDownRecommendation, Leverage, PersonnelRecommendation,
    PlayCallRecommendation, WinProbabilityReport,
};

// Re-export feature projection types
pub use features::{project, FeatureVector, ModelKind, ModelScaler, ScalerSet};

// Re-export model contracts
pub use predictor::{
    FourthDownModel, FourthDownScores, ModelSet, PassRunModel, PlayClassModel, WinProbModel,
};

// Re-export state and simulation types
pub use models::{GameState, TeamSide};
pub use simulator::{ClockImpact, PlayCall, PlayOutcome, PlaySimulator};

// Re-export formation lookups
pub use formation::{
    defensive_formation, formation_template, offensive_formation, FormationSlot,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decision_request(down: u8, distance: u16, yard_line: i16) -> String {
        json!({
            "schema_version": 1,
            "state": {
                "down": down,
                "distance": distance,
                "yard_line_100": yard_line,
                "quarter": 4,
                "quarter_seconds_remaining": 300,
                "game_seconds_remaining": 300,
                "score_home": 20,
                "score_away": 17,
                "posteam_timeouts": 2,
                "defteam_timeouts": 2
            }
        })
        .to_string()
    }

    #[test]
    fn test_basic_decision() {
        let synth = DecisionSynthesizer::baseline();
        let result = decide_json(&synth, &decision_request(4, 1, 40));
        assert!(result.is_ok(), "decision should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["results"]["fourth_down"]["recommendation"], "go");
        // The 40 is outside field-goal range, so no kick probability.
        assert!(parsed["results"]["fourth_down"]
            .get("field_goal_probability")
            .is_none());
    }

    #[test]
    fn test_simulation_determinism() {
        let request = json!({
            "schema_version": 1,
            "seed": 424242,
            "action": "run",
            "state": {
                "down": 1, "distance": 10, "yard_line_100": 60,
                "quarter": 2, "quarter_seconds_remaining": 600,
                "game_seconds_remaining": 2400,
                "score_home": 7, "score_away": 3,
                "posteam_timeouts": 3, "defteam_timeouts": 3
            }
        })
        .to_string();

        let result1 = simulate_play_json(&request).unwrap();
        let result2 = simulate_play_json(&request).unwrap();
        assert_eq!(result1, result2, "same seed should produce same result");
    }

    #[test]
    fn test_drive_simulation_realistic_output() {
        // Walk several seeded drives and sanity-check the aggregate shape.
        let mut total_yards = 0i64;
        let mut turnovers = 0u32;
        let num_drives = 10;

        for seed in 0..num_drives {
            let mut sim = PlaySimulator::new(seed * 1000);
            let mut state = GameState {
                down: 1,
                distance: 10,
                yard_line_100: 75,
                quarter: 1,
                quarter_seconds_remaining: 900,
                game_seconds_remaining: 3600,
                half_seconds_remaining: 1800,
                score_home: 0,
                score_away: 0,
                possession: TeamSide::Home,
                posteam_timeouts: 3,
                defteam_timeouts: 3,
                clock_running: true,
            };

            for play in 0..8 {
                let call = if play % 3 == 0 { PlayCall::Run } else { PlayCall::Pass };
                let (next, outcome) = sim.step(&state, call).unwrap();
                assert!(next.validate().is_ok());
                total_yards += i64::from(outcome.yards_gained);
                if outcome.is_turnover {
                    turnovers += 1;
                }
                state = next;
            }
        }

        // 80 plays of mixed pass/run should move the ball forward overall.
        assert!(total_yards > 0, "net positive yardage: {total_yards}");
        assert!(turnovers < 40, "turnovers should be the exception: {turnovers}");
    }
}
