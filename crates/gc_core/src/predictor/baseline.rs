//! Closed-form baseline models.
//!
//! Deterministic logistic/heuristic stand-ins for the trained networks so
//! the CLI, demo scenarios, and tests run without exported weights. The
//! curves are calibrated against the identity projection — raw, unscaled
//! fields — and are intentionally simple: plausible shapes, monotonic in
//! the obvious directions, probabilities that always stay in range.

use crate::features::FeatureVector;
use crate::predictor::{
    FourthDownModel, FourthDownScores, PassRunModel, PlayClassModel, WinProbModel,
};

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn normalize(weights: &mut [f64]) {
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in weights.iter_mut() {
            *w /= total;
        }
    }
}

/// Conversion odds fall with distance; field-goal odds fall with kick
/// length (yard line + 17 for snap/hold and end-zone depth).
pub struct BaselineFourthDown;

impl FourthDownModel for BaselineFourthDown {
    fn predict(&self, features: &FeatureVector) -> FourthDownScores {
        // [distance, yard_line_100, score_diff, quarter, game_secs, timeouts]
        let x = features.as_slice();
        let distance = x[0];
        let yard_line = x[1];

        let conversion_prob = sigmoid(1.8 - 0.35 * distance);
        let kick_distance = yard_line + 17.0;
        let field_goal_prob = sigmoid(5.5 - 0.105 * kick_distance);
        let expected_points = 3.0 * conversion_prob - 1.5;

        FourthDownScores {
            conversion_prob,
            field_goal_prob,
            expected_points,
        }
    }
}

/// Logistic in the score differential with a gain that ramps as the clock
/// runs out, so late leads are near-certain while early ones are not.
pub struct BaselineWinProb;

impl WinProbModel for BaselineWinProb {
    fn predict(&self, features: &FeatureVector) -> f64 {
        // [score_diff, quarter, game_secs, yard_line, down, distance, pos_to, def_to]
        let x = features.as_slice();
        let diff = x[0];
        let game_secs = x[2];
        let yard_line = x[3];
        let timeout_edge = x[6] - x[7];

        if game_secs <= 0.0 {
            return if diff > 0.0 {
                1.0
            } else if diff < 0.0 {
                0.0
            } else {
                0.5
            };
        }

        let frac_remaining = (game_secs / 3600.0).clamp(0.0, 1.0);
        let k = 0.08 + (1.0 - frac_remaining).powi(3) * 0.35;
        let adjusted = diff + (50.0 - yard_line) / 50.0 + 0.15 * timeout_edge;
        sigmoid(k * adjusted).clamp(0.001, 0.999)
    }
}

/// Situational weighting over the play-call categories the play-by-play
/// training data is labeled with.
pub struct BaselineOffense {
    classes: Vec<String>,
}

impl BaselineOffense {
    pub fn new() -> Self {
        Self {
            classes: ["pass", "run", "play_action", "screen", "draw"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for BaselineOffense {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayClassModel for BaselineOffense {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        // [down, distance, yard_line, score_diff, quarter, game_secs,
        //  half_secs, red_zone, goal_to_go, two_min, pos_timeouts]
        let x = features.as_slice();
        let down = x[0];
        let distance = x[1];
        let diff = x[3];
        let quarter = x[4];
        let red_zone = x[7] > 0.5;
        let goal_to_go = x[8] > 0.5;
        let two_min = x[9] > 0.5;

        // pass, run, play_action, screen, draw
        let mut w = [1.0, 1.0, 0.5, 0.25, 0.2];
        if distance >= 8.0 {
            w[0] += 1.1;
            w[3] += 0.25;
        }
        if distance <= 2.0 {
            w[1] += 1.3;
            w[2] += 0.3;
        }
        if down >= 3.0 && distance > 4.0 {
            w[0] += 0.9;
            w[4] += 0.1;
        }
        if red_zone {
            w[1] += 0.35;
        }
        if goal_to_go {
            w[1] += 0.4;
            w[2] += 0.2;
        }
        if two_min {
            w[0] += 1.6;
            w[3] += 0.1;
        }
        if diff <= -8.0 {
            w[0] += 0.7;
        }
        if diff >= 8.0 && quarter >= 4.0 {
            w[1] += 0.9;
        }

        normalize(&mut w);
        w.to_vec()
    }
}

/// Pass likelihood from down, distance, and clock pressure.
pub struct BaselineDefense;

impl PassRunModel for BaselineDefense {
    fn predict(&self, features: &FeatureVector) -> f64 {
        // [down, distance, yard_line, score_diff, quarter, game_secs,
        //  red_zone, goal_to_go, two_min]
        let x = features.as_slice();
        let down = x[0];
        let distance = x[1];
        let diff = x[3];
        let goal_to_go = x[7] > 0.5;
        let two_min = x[8] > 0.5;

        let mut z = -0.35 + 0.16 * (distance - 5.0);
        if down >= 3.0 {
            z += 0.55;
        }
        if two_min {
            z += 1.2;
        }
        if goal_to_go {
            z -= 0.45;
        }
        // A trailing offense throws; a leading one sits on the ball.
        if diff <= -4.0 {
            z += 0.35;
        } else if diff >= 4.0 {
            z -= 0.35;
        }

        sigmoid(z).clamp(0.02, 0.98)
    }
}

/// Personnel grouping weights following the short/medium/long yardage
/// heuristic the training labels were derived from.
pub struct BaselinePersonnel {
    classes: Vec<String>,
}

impl BaselinePersonnel {
    pub fn new() -> Self {
        Self {
            classes: ["11", "12", "21", "22"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for BaselinePersonnel {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayClassModel for BaselinePersonnel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        // [down, distance, yard_line, score_diff, red_zone, goal_to_go]
        let x = features.as_slice();
        let distance = x[1];
        let red_zone = x[4] > 0.5;
        let goal_to_go = x[5] > 0.5;

        // 11, 12, 21, 22
        let mut w = [1.0, 0.7, 0.35, 0.3];
        if distance > 8.0 {
            w[0] += 1.5;
        } else if distance <= 2.0 {
            w[3] += 1.2;
            w[2] += 0.6;
        } else if distance <= 5.0 {
            w[1] += 0.8;
        }
        if goal_to_go {
            w[3] += 0.8;
            w[2] += 0.2;
        } else if red_zone {
            w[1] += 0.3;
        }

        normalize(&mut w);
        w.to_vec()
    }
}
