//! Publication requests handed to the bus.

use crate::domain::id::TeamId;
use crate::domain::outcome::Outcome;

/// A (topic, payload) pair destined for one team's subscribers.
///
/// Derived 1:1 from each rostered team; created and consumed within a single
/// notification's processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub topic: String,
    pub payload: String,
}

impl Publication {
    /// Build the publication announcing `outcome` to `team`.
    ///
    /// The topic is derived deterministically from the team identifier.
    #[must_use]
    pub fn for_team(team: &TeamId, outcome: Outcome) -> Self {
        Self {
            topic: format!("team/{team}"),
            payload: outcome.label().to_string(),
        }
    }
}
