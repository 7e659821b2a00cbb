//! Stochastic play-outcome simulation.
//!
//! Advances a [`GameState`] by one chosen play. Outcome draws come from a
//! seeded ChaCha8 stream, so the same seed over the same inputs replays the
//! same drive exactly.

use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::GameState;

/// Simulated play selection.
///
/// Anything else ("FG", "kneel", ...) is rejected at the parse boundary
/// with [`CoachError::UnsupportedAction`] rather than silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayCall {
    Pass,
    Run,
    Punt,
}

impl FromStr for PlayCall {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pass" => Ok(PlayCall::Pass),
            "run" => Ok(PlayCall::Run),
            "punt" => Ok(PlayCall::Punt),
            other => Err(CoachError::UnsupportedAction(other.to_string())),
        }
    }
}

/// Whether the play left the game clock running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockImpact {
    Running,
    Stopped,
}

/// Result of one simulated play.
#[derive(Debug, Clone, Serialize)]
pub struct PlayOutcome {
    pub yards_gained: i32,
    pub is_complete: bool,
    pub is_turnover: bool,
    pub clock_impact: ClockImpact,
    pub description: String,
}

/// Completion yardage buckets for a completed pass.
const PASS_YARDS: [i32; 5] = [5, 8, 12, 20, 45];
/// Run yardage buckets; 4 appears twice and is therefore twice as likely.
const RUN_YARDS: [i32; 8] = [-2, 1, 3, 4, 4, 5, 8, 15];

const PASS_COMPLETION_RATE: f64 = 0.60;
const PASS_INTERCEPTION_RATE: f64 = 0.05;
const PUNT_DISTANCE: i32 = 40;

/// Seconds consumed by a clock-stopping play (incompletion, turnover) vs. a
/// play that keeps the clock moving through the next snap.
const ELAPSED_CLOCK_STOPPED: u32 = 6;
const ELAPSED_CLOCK_RUNNING: u32 = 40;

/// Yard line after a touchdown reset (touchback spot for the next drive).
const TOUCHBACK_YARD_LINE: i16 = 75;

struct DrawnPlay {
    yards: i32,
    is_complete: bool,
    is_turnover: bool,
    clock_impact: ClockImpact,
    description: String,
}

/// Advances game states one play at a time; owns the RNG stream for a drive.
pub struct PlaySimulator {
    rng: ChaCha8Rng,
}

impl PlaySimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn draw(&mut self, call: PlayCall) -> DrawnPlay {
        match call {
            PlayCall::Pass => {
                let r: f64 = self.rng.gen();
                if r < PASS_COMPLETION_RATE {
                    let yards = PASS_YARDS[self.rng.gen_range(0..PASS_YARDS.len())];
                    DrawnPlay {
                        yards,
                        is_complete: true,
                        is_turnover: false,
                        clock_impact: ClockImpact::Running,
                        description: format!("Pass complete for {} yards.", yards),
                    }
                } else if r < 1.0 - PASS_INTERCEPTION_RATE {
                    DrawnPlay {
                        yards: 0,
                        is_complete: false,
                        is_turnover: false,
                        clock_impact: ClockImpact::Stopped,
                        description: "Incomplete pass.".to_string(),
                    }
                } else {
                    DrawnPlay {
                        yards: 0,
                        is_complete: false,
                        is_turnover: true,
                        clock_impact: ClockImpact::Stopped,
                        description: "INTERCEPTION!".to_string(),
                    }
                }
            }
            PlayCall::Run => {
                let yards = RUN_YARDS[self.rng.gen_range(0..RUN_YARDS.len())];
                DrawnPlay {
                    yards,
                    is_complete: true,
                    is_turnover: false,
                    clock_impact: ClockImpact::Running,
                    description: format!("Run for {} yards.", yards),
                }
            }
            PlayCall::Punt => DrawnPlay {
                yards: PUNT_DISTANCE,
                is_complete: true,
                is_turnover: true,
                clock_impact: ClockImpact::Stopped,
                description: format!("Punt for {} yards.", PUNT_DISTANCE),
            },
        }
    }

    /// Run one play and produce the next state plus its outcome.
    ///
    /// The input state is untouched; a fresh state is returned. Known
    /// simplifications carried from the reference behavior: touchdowns are
    /// credited to the home score whichever side has the ball, and a
    /// turnover resets down and distance without flipping field position.
    pub fn step(&mut self, state: &GameState, call: PlayCall) -> Result<(GameState, PlayOutcome)> {
        state.validate()?;

        let play = self.draw(call);
        log::debug!(
            "play draw: {:?} -> {} yards, turnover={}",
            call,
            play.yards,
            play.is_turnover
        );

        let mut description = play.description;
        let mut is_turnover = play.is_turnover;
        let mut score_home = state.score_home;

        let mut new_distance = i32::from(state.distance) - play.yards;
        let mut new_yard_line = i32::from(state.yard_line_100) - play.yards;
        let mut new_down = state.down + 1;

        // 1. Moved the chains?
        if new_distance <= 0 {
            new_down = 1;
            new_distance = 10;
            description.push_str(" 1ST DOWN!");
        }

        // 2. Crossed the goal line?
        if new_yard_line <= 0 {
            score_home += 7;
            new_yard_line = i32::from(TOUCHBACK_YARD_LINE);
            new_down = 1;
            new_distance = 10;
            is_turnover = true; // kickoff follows
            description.push_str(" TOUCHDOWN!");
        }

        // 3. Out of downs?
        if new_down > 4 && !is_turnover {
            is_turnover = true;
            description.push_str(" Turnover on Downs.");
        }

        // 4. Clock runoff, clamped at zero on both clocks.
        let elapsed = match play.clock_impact {
            ClockImpact::Stopped => ELAPSED_CLOCK_STOPPED,
            ClockImpact::Running => ELAPSED_CLOCK_RUNNING,
        };
        let quarter_seconds = state.quarter_seconds_remaining.saturating_sub(elapsed);
        let game_seconds = state.game_seconds_remaining.saturating_sub(elapsed);
        let mut clock_running = play.clock_impact == ClockImpact::Running;

        // 5. Possession change: fresh set of downs, dead ball.
        if is_turnover {
            new_down = 1;
            new_distance = 10;
            clock_running = false;
        }

        let next = GameState {
            down: new_down,
            distance: new_distance as u16,
            // A loss near one's own goal line cannot back the offense out
            // of the field of play.
            yard_line_100: new_yard_line.min(99) as i16,
            quarter: state.quarter,
            quarter_seconds_remaining: quarter_seconds,
            game_seconds_remaining: game_seconds,
            half_seconds_remaining: state.half_seconds_remaining,
            score_home,
            score_away: state.score_away,
            possession: state.possession,
            posteam_timeouts: state.posteam_timeouts,
            defteam_timeouts: state.defteam_timeouts,
            clock_running,
        };
        debug_assert!(next.validate().is_ok());

        let outcome = PlayOutcome {
            yards_gained: play.yards,
            is_complete: play.is_complete,
            is_turnover,
            clock_impact: play.clock_impact,
            description,
        };
        Ok((next, outcome))
    }
}
