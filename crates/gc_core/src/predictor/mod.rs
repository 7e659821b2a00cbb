//! Prediction model contracts.
//!
//! The decision engine consumes trained models through these narrow traits;
//! the actual inference backend (exported network weights, a remote scoring
//! service, or the closed-form baselines in [`baseline`]) is irrelevant to
//! the synthesis logic. All implementations must be stateless with respect
//! to prediction: same features, same output.

pub mod baseline;

use serde::Serialize;

use crate::features::{FeatureVector, ModelKind};

/// Raw scores from the 4th-down model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FourthDownScores {
    /// P(convert) when going for it, in [0, 1].
    pub conversion_prob: f64,
    /// P(make) for a field-goal attempt, in [0, 1].
    pub field_goal_prob: f64,
    /// Expected points added for the situation.
    pub expected_points: f64,
}

pub trait FourthDownModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> FourthDownScores;
}

pub trait WinProbModel: Send + Sync {
    /// P(possession team wins), in [0, 1].
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Multi-class scorer (offensive play call, personnel grouping).
///
/// `classes()` order is the declaration order used for deterministic
/// tie-breaking; `predict_proba` returns one probability per class, summing
/// to 1.
pub trait PlayClassModel: Send + Sync {
    fn classes(&self) -> &[String];
    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64>;
}

pub trait PassRunModel: Send + Sync {
    /// P(offense passes), in [0, 1].
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// The resolved model handles for one process.
///
/// Loaded once at startup and passed into
/// [`DecisionSynthesizer`](crate::decision::DecisionSynthesizer)
/// construction; a `None` slot makes partial availability explicit instead
/// of hiding it in a global registry. Read-only after construction, so
/// concurrent decision calls share it freely.
#[derive(Default)]
pub struct ModelSet {
    pub fourth_down: Option<Box<dyn FourthDownModel>>,
    pub win_prob: Option<Box<dyn WinProbModel>>,
    pub offensive: Option<Box<dyn PlayClassModel>>,
    pub defensive: Option<Box<dyn PassRunModel>>,
    pub personnel: Option<Box<dyn PlayClassModel>>,
}

impl ModelSet {
    /// No models loaded; every decision kind reports unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All five baseline models, for demos and tests. Pair with
    /// [`ScalerSet::identity`](crate::features::ScalerSet::identity) — the
    /// baselines read raw, unscaled fields.
    pub fn baseline() -> Self {
        Self {
            fourth_down: Some(Box::new(baseline::BaselineFourthDown)),
            win_prob: Some(Box::new(baseline::BaselineWinProb)),
            offensive: Some(Box::new(baseline::BaselineOffense::new())),
            defensive: Some(Box::new(baseline::BaselineDefense)),
            personnel: Some(Box::new(baseline::BaselinePersonnel::new())),
        }
    }

    pub fn is_loaded(&self, kind: ModelKind) -> bool {
        match kind {
            ModelKind::FourthDown => self.fourth_down.is_some(),
            ModelKind::WinProbability => self.win_prob.is_some(),
            ModelKind::Offensive => self.offensive.is_some(),
            ModelKind::Defensive => self.defensive.is_some(),
            ModelKind::Personnel => self.personnel.is_some(),
        }
    }

    pub fn loaded_kinds(&self) -> Vec<ModelKind> {
        ModelKind::all()
            .into_iter()
            .filter(|kind| self.is_loaded(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_reports_nothing_loaded() {
        assert!(ModelSet::empty().loaded_kinds().is_empty());
    }

    #[test]
    fn baseline_set_loads_all_kinds() {
        let set = ModelSet::baseline();
        for kind in ModelKind::all() {
            assert!(set.is_loaded(kind), "{kind} should be loaded");
        }
    }
}
