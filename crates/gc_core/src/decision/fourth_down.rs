//! 4th-down expected-value policy.
//!
//! Each legal action gets a scalar expected value: conversion and made-kick
//! probabilities are paid out at field-goal value, while a punt is worth a
//! flat field-position constant. The recommendation is the EV argmax over
//! the legal candidates, with a fixed preference order on exact ties.

use serde::Serialize;

use crate::decision::round4;
use crate::models::GameState;
use crate::predictor::FourthDownScores;

/// Assumed payoff (points) for a successful conversion or made field goal.
const SUCCESS_POINT_VALUE: f64 = 3.0;
/// Flat expected field-position value of punting the ball away.
const PUNT_EXPECTED_VALUE: f64 = 1.5;
/// Field-goal attempts are only on the table inside the opponent 35.
const FIELD_GOAL_RANGE_YARD_LINE: i16 = 35;

/// The three 4th-down choices, in tie-break preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FourthDownAction {
    Go,
    Kick,
    Punt,
}

/// One row of the decision table. Only legal actions become candidates, so
/// an out-of-range kick never carries an expected value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionCandidate {
    pub action: FourthDownAction,
    pub expected_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FourthDownRecommendation {
    pub recommendation: FourthDownAction,
    /// Legal candidates in preference order, each with its EV.
    pub candidates: Vec<ActionCandidate>,
    pub conversion_probability: f64,
    /// Absent when the kick is out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_goal_probability: Option<f64>,
    pub expected_points: f64,
    /// The range-free fallback call ("GO" / "PUNT/KICK").
    pub simple_call: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_probability: Option<f64>,
}

/// Fallback policy for contexts without field-goal-range information:
/// go when conversion is better than a coin flip, otherwise give the ball
/// away one way or the other.
pub fn simple_fourth_down_call(conversion_prob: f64) -> &'static str {
    if conversion_prob > 0.5 {
        "GO"
    } else {
        "PUNT/KICK"
    }
}

pub(crate) fn recommend(
    state: &GameState,
    scores: FourthDownScores,
    win_probability: Option<f64>,
) -> FourthDownRecommendation {
    let kick_legal = state.yard_line_100 < FIELD_GOAL_RANGE_YARD_LINE;

    let mut candidates = vec![ActionCandidate {
        action: FourthDownAction::Go,
        expected_value: scores.conversion_prob * SUCCESS_POINT_VALUE,
    }];
    if kick_legal {
        candidates.push(ActionCandidate {
            action: FourthDownAction::Kick,
            expected_value: scores.field_goal_prob * SUCCESS_POINT_VALUE,
        });
    }
    candidates.push(ActionCandidate {
        action: FourthDownAction::Punt,
        expected_value: PUNT_EXPECTED_VALUE,
    });

    // Candidates are already in preference order, so a strict `>` scan
    // resolves ties deterministically toward the aggressive choice.
    let mut recommendation = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.expected_value > recommendation.expected_value {
            recommendation = *candidate;
        }
    }
    log::debug!(
        "4th down at the {}: {:?} (ev {:.2})",
        state.yard_line_100,
        recommendation.action,
        recommendation.expected_value
    );

    FourthDownRecommendation {
        recommendation: recommendation.action,
        candidates,
        conversion_probability: round4(scores.conversion_prob),
        field_goal_probability: kick_legal.then(|| round4(scores.field_goal_prob)),
        expected_points: round4(scores.expected_points),
        simple_call: simple_fourth_down_call(scores.conversion_prob),
        win_probability,
    }
}
