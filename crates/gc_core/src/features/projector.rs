//! Projection of a [`GameState`] into a model's feature vector.

use crate::error::{CoachError, Result};
use crate::features::{Field, FeatureVector, ModelKind, ScalerSet};
use crate::models::GameState;

/// Extract a single field as `f64`. Total over `Field`, so a model's field
/// table can never reference something the state cannot supply.
fn extract(state: &GameState, field: Field) -> f64 {
    match field {
        Field::Down => f64::from(state.down),
        Field::Distance => f64::from(state.distance),
        Field::YardLine100 => f64::from(state.yard_line_100),
        Field::ScoreDifferential => f64::from(state.score_differential()),
        Field::Quarter => f64::from(state.quarter),
        Field::GameSecondsRemaining => f64::from(state.game_seconds_remaining),
        Field::HalfSecondsRemaining => f64::from(state.half_seconds_remaining),
        Field::RedZone => f64::from(u8::from(state.red_zone())),
        Field::GoalToGo => f64::from(u8::from(state.goal_to_go())),
        Field::TwoMinuteDrill => f64::from(u8::from(state.two_minute_drill())),
        Field::PosteamTimeouts => f64::from(state.posteam_timeouts),
        Field::DefteamTimeouts => f64::from(state.defteam_timeouts),
    }
}

/// Build the ordered, normalized input for `kind`.
///
/// Pure function of `(state, kind, scalers)`; the returned vector belongs to
/// the caller and is never shared across models.
pub fn project(state: &GameState, kind: ModelKind, scalers: &ScalerSet) -> Result<FeatureVector> {
    state.validate()?;
    let mut values: Vec<f64> = kind
        .input_fields()
        .iter()
        .map(|field| extract(state, *field))
        .collect();
    let scaler = scalers
        .scaler(kind)
        .ok_or_else(|| CoachError::Calibration(format!("no scaler fitted for {kind}")))?;
    scaler.transform(&mut values)?;
    Ok(FeatureVector::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSide;

    fn fourth_and_two() -> GameState {
        GameState {
            down: 4,
            distance: 2,
            yard_line_100: 42,
            quarter: 3,
            quarter_seconds_remaining: 525,
            game_seconds_remaining: 1425,
            half_seconds_remaining: 1425,
            score_home: 24,
            score_away: 21,
            possession: TeamSide::Home,
            posteam_timeouts: 3,
            defteam_timeouts: 2,
            clock_running: true,
        }
    }

    #[test]
    fn identity_projection_reproduces_raw_fields_in_order() {
        let state = fourth_and_two();
        let v = project(&state, ModelKind::FourthDown, &ScalerSet::identity()).unwrap();
        assert_eq!(v.as_slice(), &[2.0, 42.0, 3.0, 3.0, 1425.0, 3.0]);

        let v = project(&state, ModelKind::WinProbability, &ScalerSet::identity()).unwrap();
        assert_eq!(v.as_slice(), &[3.0, 3.0, 1425.0, 42.0, 4.0, 2.0, 3.0, 2.0]);
    }

    #[test]
    fn flags_project_as_zero_or_one() {
        let mut state = fourth_and_two();
        state.yard_line_100 = 8;
        state.quarter = 4;
        state.game_seconds_remaining = 100;
        let v = project(&state, ModelKind::Defensive, &ScalerSet::identity()).unwrap();
        // ... down, distance, yard_line, diff, quarter, secs, rz, gtg, 2min
        assert_eq!(&v.as_slice()[6..], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn affine_transform_is_applied_elementwise() {
        let json = serde_json::json!({
            "schema_version": 1,
            "scalers": {
                "personnel": {
                    "mean": [2.0, 5.0, 50.0, 0.0, 0.0, 0.0],
                    "scale": [1.0, 4.0, 25.0, 8.0, 1.0, 1.0]
                }
            }
        })
        .to_string();
        let scalers = ScalerSet::from_json(&json).unwrap();
        let state = fourth_and_two();
        let v = project(&state, ModelKind::Personnel, &scalers).unwrap();
        // (4-2)/1, (2-5)/4, (42-50)/25, (3-0)/8, 0, 0
        assert_eq!(v.as_slice(), &[2.0, -0.75, -0.32, 0.375, 0.0, 0.0]);
    }

    #[test]
    fn missing_scaler_is_a_calibration_error() {
        let scalers = ScalerSet::from_json(r#"{"schema_version":1,"scalers":{}}"#).unwrap();
        let err = project(&fourth_and_two(), ModelKind::Offensive, &scalers).unwrap_err();
        assert!(matches!(err, CoachError::Calibration(_)));
    }

    #[test]
    fn invalid_state_is_rejected_before_projection() {
        let mut state = fourth_and_two();
        state.down = 0;
        let err = project(&state, ModelKind::FourthDown, &ScalerSet::identity()).unwrap_err();
        assert!(matches!(err, CoachError::InvalidGameState(_)));
    }
}
