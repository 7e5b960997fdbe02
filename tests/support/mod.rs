//! Shared builders for integration tests.

use scorebridge::domain::{Alliance, MatchNumber, MatchResult, TeamId};

/// Build an alliance from three explicit roster slots.
pub fn alliance(slots: [Option<&str>; 3]) -> Alliance {
    Alliance::new(slots.map(|slot| slot.map(TeamId::from)))
}

/// Build a match result with explicit scores and rosters.
pub fn match_result(
    number: u32,
    red_score: Option<i64>,
    blue_score: Option<i64>,
    red: [Option<&str>; 3],
    blue: [Option<&str>; 3],
) -> MatchResult {
    MatchResult {
        number: MatchNumber::new(number),
        red_score,
        blue_score,
        red: alliance(red),
        blue: alliance(blue),
    }
}
