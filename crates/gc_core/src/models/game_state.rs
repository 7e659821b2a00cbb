//! Situational game snapshot.
//!
//! `GameState` is both the inbound DTO for decision requests and the output
//! of the play simulator. Situational flags (`red_zone`, `goal_to_go`,
//! `two_minute_drill`) and `score_differential` are methods over the numeric
//! fields so they can never be set out of sync with them.

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Which sideline currently has the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

fn default_half_seconds() -> u32 {
    1800
}

fn default_quarter_seconds() -> u32 {
    900
}

fn default_clock_running() -> bool {
    true
}

/// The situation at the start of a play.
///
/// Constructed fresh per request or produced by
/// [`PlaySimulator::step`](crate::simulator::PlaySimulator::step); the
/// simulator always returns a new instance rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current down (1-4).
    pub down: u8,
    /// Yards to gain for a first down (>= 1).
    pub distance: u16,
    /// Yards from the opponent goal line (1-99, lower = closer to scoring).
    pub yard_line_100: i16,
    /// Quarter 1-4, 5 = overtime.
    pub quarter: u8,
    /// Seconds left on the quarter clock. Only the simulator consumes it,
    /// so decision-only requests may omit it.
    #[serde(default = "default_quarter_seconds")]
    pub quarter_seconds_remaining: u32,
    /// Seconds left in the whole game.
    pub game_seconds_remaining: u32,
    /// Seconds left in the current half.
    #[serde(default = "default_half_seconds")]
    pub half_seconds_remaining: u32,
    pub score_home: u32,
    pub score_away: u32,
    #[serde(default)]
    pub possession: TeamSide,
    /// Possession-team timeouts remaining (0-3).
    pub posteam_timeouts: u8,
    /// Defending-team timeouts remaining (0-3).
    pub defteam_timeouts: u8,
    #[serde(default = "default_clock_running")]
    pub clock_running: bool,
}

impl GameState {
    /// Possession-team score minus opponent score.
    #[inline]
    pub fn score_differential(&self) -> i32 {
        let diff = self.score_home as i32 - self.score_away as i32;
        match self.possession {
            TeamSide::Home => diff,
            TeamSide::Away => -diff,
        }
    }

    /// Inside the opponent 20.
    #[inline]
    pub fn red_zone(&self) -> bool {
        self.yard_line_100 <= 20
    }

    /// Inside the opponent 10.
    #[inline]
    pub fn goal_to_go(&self) -> bool {
        self.yard_line_100 <= 10
    }

    /// Under two minutes in the 2nd or 4th quarter.
    #[inline]
    pub fn two_minute_drill(&self) -> bool {
        self.game_seconds_remaining <= 120 && (self.quarter == 2 || self.quarter == 4)
    }

    /// Reject structurally impossible states before any predictor or
    /// simulator call. Boundaries call this first; nothing downstream
    /// re-checks.
    pub fn validate(&self) -> Result<()> {
        if !(1..=4).contains(&self.down) {
            return Err(CoachError::InvalidGameState(format!(
                "down must be 1..=4, got {}",
                self.down
            )));
        }
        if self.distance < 1 {
            return Err(CoachError::InvalidGameState(format!(
                "distance must be >= 1, got {}",
                self.distance
            )));
        }
        if !(1..=99).contains(&self.yard_line_100) {
            return Err(CoachError::InvalidGameState(format!(
                "yard_line_100 must be 1..=99, got {}",
                self.yard_line_100
            )));
        }
        if !(1..=5).contains(&self.quarter) {
            return Err(CoachError::InvalidGameState(format!(
                "quarter must be 1..=5, got {}",
                self.quarter
            )));
        }
        if self.posteam_timeouts > 3 || self.defteam_timeouts > 3 {
            return Err(CoachError::InvalidGameState(format!(
                "timeouts must be 0..=3, got {}/{}",
                self.posteam_timeouts, self.defteam_timeouts
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midfield_state() -> GameState {
        GameState {
            down: 1,
            distance: 10,
            yard_line_100: 50,
            quarter: 2,
            quarter_seconds_remaining: 420,
            game_seconds_remaining: 2220,
            half_seconds_remaining: 420,
            score_home: 14,
            score_away: 10,
            possession: TeamSide::Home,
            posteam_timeouts: 3,
            defteam_timeouts: 3,
            clock_running: true,
        }
    }

    #[test]
    fn derived_flags_track_numeric_fields() {
        let mut state = midfield_state();
        assert!(!state.red_zone());
        assert!(!state.goal_to_go());

        state.yard_line_100 = 18;
        assert!(state.red_zone());
        assert!(!state.goal_to_go());

        state.yard_line_100 = 7;
        assert!(state.red_zone());
        assert!(state.goal_to_go());
    }

    #[test]
    fn two_minute_drill_needs_even_quarter() {
        let mut state = midfield_state();
        state.game_seconds_remaining = 90;
        state.quarter = 4;
        assert!(state.two_minute_drill());

        state.quarter = 3;
        assert!(!state.two_minute_drill());

        state.quarter = 2;
        state.game_seconds_remaining = 121;
        assert!(!state.two_minute_drill());
    }

    #[test]
    fn score_differential_follows_possession() {
        let mut state = midfield_state();
        assert_eq!(state.score_differential(), 4);
        state.possession = TeamSide::Away;
        assert_eq!(state.score_differential(), -4);
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let mut state = midfield_state();
        state.down = 5;
        assert!(matches!(state.validate(), Err(CoachError::InvalidGameState(_))));

        let mut state = midfield_state();
        state.yard_line_100 = 0;
        assert!(state.validate().is_err());

        let mut state = midfield_state();
        state.distance = 0;
        assert!(state.validate().is_err());

        let mut state = midfield_state();
        state.posteam_timeouts = 4;
        assert!(state.validate().is_err());
    }

    #[test]
    fn state_round_trips_through_json_with_defaults() {
        let json = r#"{
            "down": 4, "distance": 2, "yard_line_100": 42,
            "quarter": 3, "quarter_seconds_remaining": 525,
            "game_seconds_remaining": 1425,
            "score_home": 24, "score_away": 21,
            "posteam_timeouts": 3, "defteam_timeouts": 3
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.half_seconds_remaining, 1800);
        assert_eq!(state.possession, TeamSide::Home);
        assert!(state.clock_running);
        assert!(state.validate().is_ok());
    }
}
