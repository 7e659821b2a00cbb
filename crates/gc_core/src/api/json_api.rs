//! JSON API layer.
//!
//! String-in/string-out entry points for embedding hosts (HTTP frontends,
//! engine bridges, the CLI). The synthesizer context is passed in
//! explicitly; this layer only parses, dispatches, and serializes.

use serde::{Deserialize, Serialize};

use crate::decision::{skip_unavailable, CombinedDecision, DecisionSynthesizer};
use crate::error::Result;
use crate::features::ModelKind;
use crate::models::GameState;
use crate::scenarios::{demo_scenarios, scenario_by_id, DemoScenario};
use crate::simulator::{PlayCall, PlayOutcome, PlaySimulator};

pub const API_SCHEMA_VERSION: u8 = 1;

// ========== Request/Response Structures ==========

#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub schema_version: u8,
    pub state: GameState,
    /// Restrict to specific decision kinds; `None` means all of them.
    #[serde(default)]
    pub kinds: Option<Vec<ModelKind>>,
}

#[derive(Debug, Serialize)]
pub struct DecideResponse {
    pub schema_version: u8,
    pub results: CombinedDecision,
    /// Which models were available to this process; kinds missing from
    /// `results` were either not requested or not loaded.
    pub models_loaded: Vec<ModelKind>,
}

#[derive(Debug, Deserialize)]
pub struct SimulatePlayRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// "pass" | "run" | "punt"; anything else is an unsupported action.
    pub action: String,
    pub state: GameState,
}

#[derive(Debug, Serialize)]
pub struct SimulatePlayResponse {
    pub schema_version: u8,
    pub state: GameState,
    pub outcome: PlayOutcome,
}

#[derive(Debug, Serialize)]
struct ScenarioListResponse {
    schema_version: u8,
    scenarios: Vec<DemoScenario>,
}

// ========== Entry Points ==========

/// Combined decision call. Decision kinds whose model is not loaded are
/// omitted from the result rather than failing the call.
pub fn decide_json(synth: &DecisionSynthesizer, request_json: &str) -> Result<String> {
    let request: DecideRequest = serde_json::from_str(request_json)?;
    let results = match &request.kinds {
        None => synth.decide_all(&request.state)?,
        Some(kinds) => {
            request.state.validate()?;
            let mut results = CombinedDecision::default();
            for kind in kinds {
                fill_kind(synth, &request.state, *kind, &mut results)?;
            }
            results
        }
    };
    let response = DecideResponse {
        schema_version: API_SCHEMA_VERSION,
        results,
        models_loaded: synth.models().loaded_kinds(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Single-kind decision call; a missing model is a hard
/// [`ModelUnavailable`](crate::error::CoachError::ModelUnavailable) here.
pub fn decide_kind_json(
    synth: &DecisionSynthesizer,
    kind: ModelKind,
    state_json: &str,
) -> Result<String> {
    let state: GameState = serde_json::from_str(state_json)?;
    let json = match kind {
        ModelKind::FourthDown => serde_json::to_string(&synth.fourth_down(&state)?)?,
        ModelKind::WinProbability => serde_json::to_string(&synth.win_probability(&state)?)?,
        ModelKind::Offensive => serde_json::to_string(&synth.offensive(&state)?)?,
        ModelKind::Defensive => serde_json::to_string(&synth.defensive(&state)?)?,
        ModelKind::Personnel => serde_json::to_string(&synth.personnel(&state)?)?,
    };
    Ok(json)
}

fn fill_kind(
    synth: &DecisionSynthesizer,
    state: &GameState,
    kind: ModelKind,
    results: &mut CombinedDecision,
) -> Result<()> {
    match kind {
        ModelKind::FourthDown => {
            results.fourth_down = skip_unavailable(synth.fourth_down(state))?
        }
        ModelKind::WinProbability => {
            results.win_probability = skip_unavailable(synth.win_probability(state))?
        }
        ModelKind::Offensive => results.offensive = skip_unavailable(synth.offensive(state))?,
        ModelKind::Defensive => results.defensive = skip_unavailable(synth.defensive(state))?,
        ModelKind::Personnel => results.personnel = skip_unavailable(synth.personnel(state))?,
    }
    Ok(())
}

/// Advance a game state by one simulated play.
pub fn simulate_play_json(request_json: &str) -> Result<String> {
    let request: SimulatePlayRequest = serde_json::from_str(request_json)?;
    let call: PlayCall = request.action.parse()?;
    let mut simulator = PlaySimulator::new(request.seed);
    let (state, outcome) = simulator.step(&request.state, call)?;
    let response = SimulatePlayResponse {
        schema_version: API_SCHEMA_VERSION,
        state,
        outcome,
    };
    Ok(serde_json::to_string(&response)?)
}

/// List the curated demo scenarios.
pub fn scenarios_json() -> Result<String> {
    let response = ScenarioListResponse {
        schema_version: API_SCHEMA_VERSION,
        scenarios: demo_scenarios(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Fetch one demo scenario by id; `Ok(None)` when unknown.
pub fn scenario_json(id: &str) -> Result<Option<String>> {
    match scenario_by_id(id) {
        Some(scenario) => Ok(Some(serde_json::to_string(&scenario)?)),
        None => Ok(None),
    }
}
