//! Formation selection and alignment templates.
//!
//! Pure rule-table lookups used to decorate offensive/defensive
//! recommendations with a named alignment and its coordinate payload.
//!
//! Coordinate system: origin at the ball, X horizontal (-25..25 yards),
//! Y depth (negative = offensive backfield, positive = defensive side).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One aligned player in a formation template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationSlot {
    pub role: &'static str,
    pub x: f32,
    pub y: f32,
}

const fn slot(role: &'static str, x: f32, y: f32) -> FormationSlot {
    FormationSlot { role, x, y }
}

const SHOTGUN_SPREAD: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -5.0),
    slot("RB", 1.5, -5.0),
    slot("WR", -20.0, 0.0),
    slot("WR", 20.0, 0.0),
    slot("WR", -15.0, 0.0), // slot receiver
    slot("TE", 4.5, 0.0),
];

const GUN_BUNCH_RIGHT: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -5.0),
    slot("RB", -1.5, -5.0), // weak-side back
    slot("WR", -20.0, 0.0), // iso X
    slot("WR", 12.0, 0.0),  // point
    slot("WR", 14.0, -1.0), // wing
    slot("TE", 10.0, -1.0), // inside bunch
];

const SINGLEBACK_ACE: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -1.0),
    slot("RB", 0.0, -6.0),
    slot("WR", -20.0, 0.0),
    slot("WR", 20.0, 0.0),
    slot("TE", -4.5, 0.0),
    slot("TE", 4.5, 0.0),
];

const I_FORMATION: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -1.0),
    slot("FB", 0.0, -4.0),
    slot("RB", 0.0, -7.0),
    slot("WR", -20.0, 0.0),
    slot("WR", 20.0, 0.0),
    slot("TE", 4.5, 0.0),
];

const PISTOL_STRONG: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -4.0),
    slot("RB", 0.0, -7.0),
    slot("TE", 4.5, 0.0),   // Y
    slot("TE", -4.5, -1.0), // H-back wing
    slot("WR", -20.0, 0.0),
    slot("WR", 20.0, 0.0),
];

const EMPTY_SET: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("QB", 0.0, -5.0),
    slot("WR", -22.0, 0.0),
    slot("WR", -16.0, 0.0),
    slot("WR", 22.0, 0.0),
    slot("WR", 16.0, 0.0),
    slot("WR", 10.0, 0.0),
];

const GOAL_LINE_JUMBO: &[FormationSlot] = &[
    slot("C", 0.0, 0.0),
    slot("LG", -1.5, 0.0),
    slot("RG", 1.5, 0.0),
    slot("LT", -3.0, 0.0),
    slot("RT", 3.0, 0.0),
    slot("TE", -4.5, 0.0),
    slot("TE", 4.5, 0.0),
    slot("TE", 6.0, 0.0), // extra heavy
    slot("QB", 0.0, -1.0),
    slot("FB", 0.0, -3.0),
    slot("RB", 0.0, -6.0),
];

const BASE_4_3: &[FormationSlot] = &[
    slot("DE", -4.0, 1.0),
    slot("DT", -1.5, 1.0),
    slot("DT", 1.5, 1.0),
    slot("DE", 4.0, 1.0),
    slot("LB", -4.0, 4.0),
    slot("MLB", 0.0, 4.0),
    slot("LB", 4.0, 4.0),
    slot("CB", -20.0, 5.0),
    slot("CB", 20.0, 5.0),
    slot("S", -8.0, 12.0),
    slot("S", 8.0, 12.0),
];

const NICKEL_4_2_5: &[FormationSlot] = &[
    slot("DE", -4.0, 1.0),
    slot("DT", -1.5, 1.0),
    slot("DT", 1.5, 1.0),
    slot("DE", 4.0, 1.0),
    slot("LB", -3.0, 4.0),
    slot("LB", 3.0, 4.0),
    slot("NCB", -15.0, 3.0), // slot corner
    slot("CB", -20.0, 5.0),
    slot("CB", 20.0, 5.0),
    slot("S", -8.0, 12.0),
    slot("S", 8.0, 12.0),
];

const GOAL_LINE_6_2: &[FormationSlot] = &[
    slot("DL", -5.0, 1.0),
    slot("DL", -3.0, 1.0),
    slot("DL", -1.0, 1.0),
    slot("DL", 1.0, 1.0),
    slot("DL", 3.0, 1.0),
    slot("DL", 5.0, 1.0),
    slot("LB", -2.0, 2.5),
    slot("LB", 2.0, 2.5),
    slot("DB", -10.0, 4.0),
    slot("DB", 10.0, 4.0),
    slot("S", 0.0, 6.0),
];

static TEMPLATES: Lazy<HashMap<&'static str, &'static [FormationSlot]>> = Lazy::new(|| {
    HashMap::from([
        ("Shotgun Spread", SHOTGUN_SPREAD),
        ("Gun Bunch Right", GUN_BUNCH_RIGHT),
        ("Singleback Ace", SINGLEBACK_ACE),
        ("I-Formation", I_FORMATION),
        ("Pistol Strong", PISTOL_STRONG),
        ("Empty Set", EMPTY_SET),
        ("Goal Line Jumbo", GOAL_LINE_JUMBO),
        ("Base 4-3", BASE_4_3),
        ("Nickel 4-2-5", NICKEL_4_2_5),
        ("Goal Line 6-2", GOAL_LINE_6_2),
    ])
});

/// Coordinate payload for a named formation; empty for unknown names.
pub fn formation_template(name: &str) -> &'static [FormationSlot] {
    TEMPLATES.get(name).copied().unwrap_or(&[])
}

/// Offensive alignment for a recommended play call.
pub fn offensive_formation(
    play_type: &str,
    personnel: &str,
    distance: u16,
    is_two_minute: bool,
) -> &'static str {
    if is_two_minute {
        return "Empty Set";
    }

    if distance <= 1 && matches!(personnel, "22" | "23" | "13") {
        return "Goal Line Jumbo";
    }

    if play_type.to_ascii_lowercase().contains("run") {
        if matches!(personnel, "21" | "22" | "13") {
            // Short yardage wants the power look, medium the pistol.
            if distance < 3 {
                return "I-Formation";
            }
            return "Pistol Strong";
        }
        return "Singleback Ace";
    }

    if distance >= 10 {
        return "Empty Set";
    }
    if distance > 6 {
        return "Shotgun Spread";
    }
    if distance >= 3 {
        return "Gun Bunch Right"; // man-beater territory
    }

    "Singleback Ace"
}

/// Defensive alignment against an offensive look.
pub fn defensive_formation(
    off_personnel: &str,
    pass_likelihood: f64,
    is_goal_line: bool,
) -> &'static str {
    if is_goal_line {
        return "Goal Line 6-2";
    }

    // Spread sets (3+ WR) pull the nickel package regardless of read.
    if matches!(off_personnel, "11" | "10" | "01") {
        return "Nickel 4-2-5";
    }

    if pass_likelihood > 0.75 {
        return "Nickel 4-2-5";
    }

    "Base 4-3"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_aligns_eleven_players() {
        for name in [
            "Shotgun Spread",
            "Gun Bunch Right",
            "Singleback Ace",
            "I-Formation",
            "Pistol Strong",
            "Empty Set",
            "Goal Line Jumbo",
            "Base 4-3",
            "Nickel 4-2-5",
            "Goal Line 6-2",
        ] {
            assert_eq!(formation_template(name).len(), 11, "{name}");
        }
    }

    #[test]
    fn unknown_formation_resolves_to_empty_payload() {
        assert!(formation_template("Wishbone").is_empty());
    }

    #[test]
    fn two_minute_overrides_everything() {
        assert_eq!(offensive_formation("run", "22", 1, true), "Empty Set");
    }

    #[test]
    fn heavy_personnel_goal_line_gets_jumbo() {
        assert_eq!(offensive_formation("run", "22", 1, false), "Goal Line Jumbo");
        assert_eq!(offensive_formation("pass", "13", 1, false), "Goal Line Jumbo");
        // Light personnel stays out of jumbo even at the stripe.
        assert_ne!(offensive_formation("run", "11", 1, false), "Goal Line Jumbo");
    }

    #[test]
    fn run_calls_split_by_personnel_and_distance() {
        assert_eq!(offensive_formation("run", "21", 2, false), "I-Formation");
        assert_eq!(offensive_formation("run", "21", 5, false), "Pistol Strong");
        assert_eq!(offensive_formation("run", "11", 5, false), "Singleback Ace");
    }

    #[test]
    fn pass_calls_spread_with_distance() {
        assert_eq!(offensive_formation("pass", "11", 12, false), "Empty Set");
        assert_eq!(offensive_formation("pass", "11", 7, false), "Shotgun Spread");
        assert_eq!(offensive_formation("pass", "11", 4, false), "Gun Bunch Right");
        assert_eq!(offensive_formation("pass", "11", 2, false), "Singleback Ace");
    }

    #[test]
    fn defense_matches_spread_and_obvious_pass() {
        assert_eq!(defensive_formation("11", 0.4, false), "Nickel 4-2-5");
        assert_eq!(defensive_formation("12", 0.8, false), "Nickel 4-2-5");
        assert_eq!(defensive_formation("12", 0.5, false), "Base 4-3");
        assert_eq!(defensive_formation("11", 0.9, true), "Goal Line 6-2");
    }
}
