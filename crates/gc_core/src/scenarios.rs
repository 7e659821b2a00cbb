//! Curated demo scenarios.
//!
//! High-pressure situations used by the CLI and UI demos to showcase the
//! decision engine without a live feed.

use serde::Serialize;

use crate::models::{GameState, TeamSide};

#[derive(Debug, Clone, Serialize)]
pub struct DemoScenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub state: GameState,
    /// What the engine is expected to say, for demo framing only.
    pub expected_call: &'static str,
}

pub fn demo_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            id: "scen_1",
            title: "The Aggressive Go",
            description: "4th & 1 on Opponent 45. Tie Game. 3rd Quarter.",
            state: GameState {
                down: 4,
                distance: 1,
                yard_line_100: 45,
                quarter: 3,
                quarter_seconds_remaining: 900,
                game_seconds_remaining: 900,
                half_seconds_remaining: 900,
                score_home: 14,
                score_away: 14,
                possession: TeamSide::Home,
                posteam_timeouts: 3,
                defteam_timeouts: 3,
                clock_running: false,
            },
            expected_call: "GO",
        },
        DemoScenario {
            id: "scen_2",
            title: "The Conservative Punt",
            description: "4th & 8 on Own 30. Up by 4. 4th Quarter (2:00 left).",
            state: GameState {
                down: 4,
                distance: 8,
                yard_line_100: 70,
                quarter: 4,
                quarter_seconds_remaining: 120,
                game_seconds_remaining: 120,
                half_seconds_remaining: 120,
                score_home: 24,
                score_away: 20,
                possession: TeamSide::Home,
                posteam_timeouts: 2,
                defteam_timeouts: 3,
                clock_running: false,
            },
            expected_call: "PUNT",
        },
        DemoScenario {
            id: "scen_3",
            title: "Field Goal Range",
            description: "4th & 5 on Opponent 25. Down by 2. 4th Quarter (0:04 left).",
            state: GameState {
                down: 4,
                distance: 5,
                yard_line_100: 25,
                quarter: 4,
                quarter_seconds_remaining: 4,
                game_seconds_remaining: 4,
                half_seconds_remaining: 4,
                score_home: 21,
                score_away: 23,
                possession: TeamSide::Home,
                posteam_timeouts: 0,
                defteam_timeouts: 0,
                clock_running: false,
            },
            expected_call: "KICK",
        },
    ]
}

pub fn scenario_by_id(id: &str) -> Option<DemoScenario> {
    demo_scenarios().into_iter().find(|s| s.id == id)
}
