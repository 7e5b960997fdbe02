//! Scoring server wire types.

use serde::Deserialize;

use crate::domain::{
    Alliance, MatchNumber, MatchResult, Notification, TeamId, UpdateType,
};
use crate::error::Result;

/// A raw frame pushed over the feed stream.
///
/// `{ "updateType": "...", "payload": { "number": ... } }`; the payload and
/// its match number may both be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMessage {
    pub update_type: UpdateType,
    #[serde(default)]
    pub payload: Option<UpdatePayload>,
}

/// Payload of a feed frame; names the match the update refers to.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePayload {
    #[serde(default)]
    pub number: Option<u32>,
}

impl FeedMessage {
    /// Parse a text frame into a notification.
    pub fn parse(text: &str) -> Result<Notification> {
        let message: FeedMessage = serde_json::from_str(text)?;
        Ok(message.into())
    }
}

impl From<FeedMessage> for Notification {
    fn from(message: FeedMessage) -> Self {
        let match_number = message
            .payload
            .and_then(|payload| payload.number)
            .map(MatchNumber::new);
        Notification::update(message.update_type, match_number)
    }
}

/// Match payload returned by the match endpoint.
///
/// Any field may be absent; absence maps to `None` rather than a parse
/// failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    #[serde(default)]
    pub match_number: Option<u32>,
    #[serde(default)]
    pub red_score: Option<i64>,
    #[serde(default)]
    pub blue_score: Option<i64>,
    #[serde(default)]
    pub red: Option<AllianceTeams>,
    #[serde(default)]
    pub blue: Option<AllianceTeams>,
}

/// One side's roster as the wire carries it: three optional robot slots.
#[derive(Debug, Default, Deserialize)]
pub struct AllianceTeams {
    #[serde(default)]
    pub robot1: Option<u32>,
    #[serde(default)]
    pub robot2: Option<u32>,
    #[serde(default)]
    pub robot3: Option<u32>,
}

impl AllianceTeams {
    fn into_alliance(self) -> Alliance {
        Alliance::new([
            self.robot1.map(TeamId::from),
            self.robot2.map(TeamId::from),
            self.robot3.map(TeamId::from),
        ])
    }
}

impl MatchResponse {
    /// Convert into domain match data.
    ///
    /// `requested` fills in the match number when the response omits it; the
    /// lookup was keyed by it, so it is authoritative enough for logging and
    /// error reporting.
    #[must_use]
    pub fn into_result(self, requested: MatchNumber) -> MatchResult {
        MatchResult {
            number: self.match_number.map(MatchNumber::new).unwrap_or(requested),
            red_score: self.red_score,
            blue_score: self.blue_score,
            red: self.red.map(AllianceTeams::into_alliance).unwrap_or_default(),
            blue: self
                .blue
                .map(AllianceTeams::into_alliance)
                .unwrap_or_default(),
        }
    }
}

/// Response of the version endpoint.
#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Response of the event detail endpoint.
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub name: String,
}
