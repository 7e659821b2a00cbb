pub mod json_api;

pub use json_api::{
    decide_json, decide_kind_json, scenario_json, scenarios_json, simulate_play_json,
    DecideRequest, DecideResponse, SimulatePlayRequest, SimulatePlayResponse,
};
