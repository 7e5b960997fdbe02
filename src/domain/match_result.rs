//! Full match data as resolved by a lookup.

use crate::domain::id::{MatchNumber, TeamId};

/// One side's roster: an ordered set of up to three team slots.
///
/// Not every match fields three teams per side; an empty slot is simply no
/// publication target. Slot order is preserved because the fan-out emission
/// order is defined over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alliance {
    slots: [Option<TeamId>; 3],
}

impl Alliance {
    /// Create an alliance from its three roster slots.
    #[must_use]
    pub fn new(slots: [Option<TeamId>; 3]) -> Self {
        Self { slots }
    }

    /// The roster slots in order, including empty ones.
    #[must_use]
    pub fn slots(&self) -> &[Option<TeamId>; 3] {
        &self.slots
    }

    /// Iterate the rostered teams in slot order, skipping empty slots.
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.slots.iter().flatten()
    }

    /// Number of rostered teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Match data returned by the lookup: identifier, scores, and both rosters.
///
/// Scores are `None` until the match has been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub number: MatchNumber,
    pub red_score: Option<i64>,
    pub blue_score: Option<i64>,
    pub red: Alliance,
    pub blue: Alliance,
}

impl MatchResult {
    /// Whether at least one alliance has a score.
    ///
    /// A posted match carrying no score at all is incomplete lookup data,
    /// not a tie.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.red_score.is_some() || self.blue_score.is_some()
    }
}
