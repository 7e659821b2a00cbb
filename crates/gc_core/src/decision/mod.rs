//! Decision synthesis.
//!
//! Orchestrates projection + prediction for each decision kind and reduces
//! raw model scores into an actionable recommendation. All entry points are
//! pure over `(state, models, scalers)` and fail independently per decision
//! kind: one missing model never takes down a combined call.

mod fourth_down;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CoachError, Result};
use crate::features::{project, FeatureVector, ModelKind, ScalerSet};
use crate::formation::{
    defensive_formation, formation_template, offensive_formation, FormationSlot,
};
use crate::models::GameState;
use crate::predictor::ModelSet;

pub use fourth_down::{
    simple_fourth_down_call, ActionCandidate, FourthDownAction, FourthDownRecommendation,
};

/// Round a reported probability the way the serving layer always has.
#[inline]
pub(crate) fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

/// How pivotal the current play is for the game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leverage {
    High,
    Medium,
    Low,
}

impl Leverage {
    /// High when the game is a coin flip, low when it is out of reach.
    pub fn from_win_prob(p: f64) -> Self {
        if (0.45..=0.55).contains(&p) {
            Leverage::High
        } else if (0.35..=0.65).contains(&p) {
            Leverage::Medium
        } else {
            Leverage::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WinProbabilityReport {
    pub win_probability: f64,
    pub opponent_win_probability: f64,
    pub leverage: Leverage,
}

/// Offensive play-call recommendation with its alignment payload.
#[derive(Debug, Clone, Serialize)]
pub struct PlayCallRecommendation {
    pub recommendation: String,
    pub confidence: f64,
    pub probabilities: BTreeMap<String, f64>,
    pub expected_epa: f64,
    pub formation: &'static str,
    pub formation_payload: Vec<FormationSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DefensiveRecommendation {
    pub recommendation: &'static str,
    pub pass_probability: f64,
    pub coverage_shell: &'static str,
    pub formation: &'static str,
    pub formation_payload: Vec<FormationSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonnelRecommendation {
    pub recommendation: String,
    pub probabilities: BTreeMap<String, f64>,
}

/// Result of the combined "advise on everything" call. A kind whose model
/// is not loaded is simply absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombinedDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fourth_down: Option<FourthDownRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_probability: Option<WinProbabilityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offensive: Option<PlayCallRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defensive: Option<DefensiveRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personnel: Option<PersonnelRecommendation>,
}

/// Deterministic argmax over `(classes, probabilities)`: strict `>` keeps
/// the first-declared class on (theoretical) ties.
fn argmax<'a>(classes: &'a [String], probs: &[f64]) -> (&'a str, f64) {
    let mut best_idx = 0;
    let mut best = f64::NEG_INFINITY;
    for (i, p) in probs.iter().enumerate() {
        if *p > best {
            best = *p;
            best_idx = i;
        }
    }
    (&classes[best_idx], best)
}

fn probability_map(classes: &[String], probs: &[f64]) -> BTreeMap<String, f64> {
    classes
        .iter()
        .cloned()
        .zip(probs.iter().map(|p| round4(*p)))
        .collect()
}

/// Turns model scores into recommendations.
///
/// Holds the immutable model/calibration context for the process; cheap to
/// share behind an `Arc` across request handlers.
pub struct DecisionSynthesizer {
    models: ModelSet,
    scalers: ScalerSet,
}

impl DecisionSynthesizer {
    pub fn new(models: ModelSet, scalers: ScalerSet) -> Self {
        Self { models, scalers }
    }

    /// Fully wired with the closed-form baselines; used by the CLI and
    /// demos when no exported artifacts are available.
    pub fn baseline() -> Self {
        Self::new(ModelSet::baseline(), ScalerSet::identity())
    }

    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    fn features(&self, state: &GameState, kind: ModelKind) -> Result<FeatureVector> {
        project(state, kind, &self.scalers)
    }

    /// Predicted personnel grouping used when decorating formations; "11"
    /// (the league-default spread look) when no personnel model is loaded.
    fn personnel_code(&self, state: &GameState) -> Result<String> {
        match &self.models.personnel {
            Some(model) => {
                let features = self.features(state, ModelKind::Personnel)?;
                let probs = model.predict_proba(&features);
                let (code, _) = argmax(model.classes(), &probs);
                Ok(code.to_string())
            }
            None => Ok("11".to_string()),
        }
    }

    /// 4th-down recommendation via the expected-value policy.
    pub fn fourth_down(&self, state: &GameState) -> Result<FourthDownRecommendation> {
        state.validate()?;
        let model = self
            .models
            .fourth_down
            .as_ref()
            .ok_or(CoachError::ModelUnavailable(ModelKind::FourthDown))?;
        let features = self.features(state, ModelKind::FourthDown)?;
        let scores = model.predict(&features);

        // Win probability rides along when that model is loaded; its
        // absence never blocks the 4th-down call.
        let win_probability = match &self.models.win_prob {
            Some(wp) => {
                let features = self.features(state, ModelKind::WinProbability)?;
                Some(round4(wp.predict(&features)))
            }
            None => None,
        };

        Ok(fourth_down::recommend(state, scores, win_probability))
    }

    /// Offensive play call: argmax over the play categories, decorated with
    /// the matching formation.
    pub fn offensive(&self, state: &GameState) -> Result<PlayCallRecommendation> {
        state.validate()?;
        let model = self
            .models
            .offensive
            .as_ref()
            .ok_or(CoachError::ModelUnavailable(ModelKind::Offensive))?;
        let features = self.features(state, ModelKind::Offensive)?;
        let probs = model.predict_proba(&features);
        let (play, confidence) = argmax(model.classes(), &probs);

        let personnel = self.personnel_code(state)?;
        let formation =
            offensive_formation(play, &personnel, state.distance, state.two_minute_drill());
        log::debug!("offensive call {play} ({confidence:.3}) -> {formation}");

        Ok(PlayCallRecommendation {
            recommendation: play.to_string(),
            confidence: round4(confidence),
            probabilities: probability_map(model.classes(), &probs),
            expected_epa: round4(0.5 * confidence),
            formation,
            formation_payload: formation_template(formation).to_vec(),
        })
    }

    /// Defensive read: pass/run lean plus a coverage shell and alignment.
    pub fn defensive(&self, state: &GameState) -> Result<DefensiveRecommendation> {
        state.validate()?;
        let model = self
            .models
            .defensive
            .as_ref()
            .ok_or(CoachError::ModelUnavailable(ModelKind::Defensive))?;
        let features = self.features(state, ModelKind::Defensive)?;
        let pass_probability = model.predict(&features);

        let recommendation = if pass_probability > 0.5 {
            "Pass Defense"
        } else {
            "Run Defense"
        };
        let coverage_shell = if pass_probability > 0.65 {
            "Nickel / Prevent"
        } else if pass_probability < 0.35 {
            "Base / Run Defend"
        } else {
            "Balanced Base Defense"
        };

        let personnel = self.personnel_code(state)?;
        let formation = defensive_formation(&personnel, pass_probability, state.goal_to_go());

        Ok(DefensiveRecommendation {
            recommendation,
            pass_probability: round4(pass_probability),
            coverage_shell,
            formation,
            formation_payload: formation_template(formation).to_vec(),
        })
    }

    /// Personnel grouping: argmax over the grouping classes.
    pub fn personnel(&self, state: &GameState) -> Result<PersonnelRecommendation> {
        state.validate()?;
        let model = self
            .models
            .personnel
            .as_ref()
            .ok_or(CoachError::ModelUnavailable(ModelKind::Personnel))?;
        let features = self.features(state, ModelKind::Personnel)?;
        let probs = model.predict_proba(&features);
        let (group, _) = argmax(model.classes(), &probs);

        Ok(PersonnelRecommendation {
            recommendation: group.to_string(),
            probabilities: probability_map(model.classes(), &probs),
        })
    }

    /// Win probability passthrough with its leverage bucket.
    pub fn win_probability(&self, state: &GameState) -> Result<WinProbabilityReport> {
        state.validate()?;
        let model = self
            .models
            .win_prob
            .as_ref()
            .ok_or(CoachError::ModelUnavailable(ModelKind::WinProbability))?;
        let features = self.features(state, ModelKind::WinProbability)?;
        let p = model.predict(&features);

        Ok(WinProbabilityReport {
            win_probability: round4(p),
            opponent_win_probability: round4(1.0 - p),
            leverage: Leverage::from_win_prob(p),
        })
    }

    /// Run every decision kind, skipping the ones whose model is missing.
    /// Only an invalid state (or a broken calibration) fails the whole call.
    pub fn decide_all(&self, state: &GameState) -> Result<CombinedDecision> {
        state.validate()?;
        Ok(CombinedDecision {
            fourth_down: skip_unavailable(self.fourth_down(state))?,
            win_probability: skip_unavailable(self.win_probability(state))?,
            offensive: skip_unavailable(self.offensive(state))?,
            defensive: skip_unavailable(self.defensive(state))?,
            personnel: skip_unavailable(self.personnel(state))?,
        })
    }
}

pub(crate) fn skip_unavailable<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_skippable() => {
            log::debug!("decision kind skipped: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
