//! Feature projection for the prediction models.
//!
//! Each model consumes a fixed, ordered list of situational fields. The
//! ordering is part of the model contract: it must match the normalization
//! that was fitted for that model, so the tables here are `const` and the
//! projector never reorders or filters at runtime.

pub mod calibration;
pub mod projector;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use calibration::{ModelScaler, ScalerSet};
pub use projector::project;

/// One situational input field, extracted from a
/// [`GameState`](crate::models::GameState) as `f64`.
///
/// Boolean flags project as 0.0 / 1.0, matching how the training pipeline
/// encoded them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Down,
    Distance,
    YardLine100,
    ScoreDifferential,
    Quarter,
    GameSecondsRemaining,
    HalfSecondsRemaining,
    RedZone,
    GoalToGo,
    TwoMinuteDrill,
    PosteamTimeouts,
    DefteamTimeouts,
}

/// The five prediction models the decision engine can consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    FourthDown,
    WinProbability,
    Offensive,
    Defensive,
    Personnel,
}

const FOURTH_DOWN_FIELDS: &[Field] = &[
    Field::Distance,
    Field::YardLine100,
    Field::ScoreDifferential,
    Field::Quarter,
    Field::GameSecondsRemaining,
    Field::PosteamTimeouts,
];

const WIN_PROBABILITY_FIELDS: &[Field] = &[
    Field::ScoreDifferential,
    Field::Quarter,
    Field::GameSecondsRemaining,
    Field::YardLine100,
    Field::Down,
    Field::Distance,
    Field::PosteamTimeouts,
    Field::DefteamTimeouts,
];

const OFFENSIVE_FIELDS: &[Field] = &[
    Field::Down,
    Field::Distance,
    Field::YardLine100,
    Field::ScoreDifferential,
    Field::Quarter,
    Field::GameSecondsRemaining,
    Field::HalfSecondsRemaining,
    Field::RedZone,
    Field::GoalToGo,
    Field::TwoMinuteDrill,
    Field::PosteamTimeouts,
];

const DEFENSIVE_FIELDS: &[Field] = &[
    Field::Down,
    Field::Distance,
    Field::YardLine100,
    Field::ScoreDifferential,
    Field::Quarter,
    Field::GameSecondsRemaining,
    Field::RedZone,
    Field::GoalToGo,
    Field::TwoMinuteDrill,
];

const PERSONNEL_FIELDS: &[Field] = &[
    Field::Down,
    Field::Distance,
    Field::YardLine100,
    Field::ScoreDifferential,
    Field::RedZone,
    Field::GoalToGo,
];

impl ModelKind {
    pub fn all() -> [ModelKind; 5] {
        [
            Self::FourthDown,
            Self::WinProbability,
            Self::Offensive,
            Self::Defensive,
            Self::Personnel,
        ]
    }

    /// Stable identifier used in calibration artifacts and JSON payloads.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FourthDown => "fourth_down",
            Self::WinProbability => "win_probability",
            Self::Offensive => "offensive",
            Self::Defensive => "defensive",
            Self::Personnel => "personnel",
        }
    }

    /// Ordered input fields for this model. Order must match the fitted
    /// normalization.
    pub fn input_fields(&self) -> &'static [Field] {
        match self {
            Self::FourthDown => FOURTH_DOWN_FIELDS,
            Self::WinProbability => WIN_PROBABILITY_FIELDS,
            Self::Offensive => OFFENSIVE_FIELDS,
            Self::Defensive => DEFENSIVE_FIELDS,
            Self::Personnel => PERSONNEL_FIELDS,
        }
    }

    /// Expected feature vector length.
    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_fields().len()
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordered model input, owned by the projection call that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        FeatureVector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_dims_match_model_contracts() {
        assert_eq!(ModelKind::FourthDown.input_dim(), 6);
        assert_eq!(ModelKind::WinProbability.input_dim(), 8);
        assert_eq!(ModelKind::Offensive.input_dim(), 11);
        assert_eq!(ModelKind::Defensive.input_dim(), 9);
        assert_eq!(ModelKind::Personnel.input_dim(), 6);
    }

    #[test]
    fn ids_round_trip_through_serde() {
        for kind in ModelKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
            let back: ModelKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
