//! Scoring server integration: REST client and websocket feed stream.

mod client;
mod messages;
mod websocket;

pub use client::ScoringClient;
pub use messages::{AllianceTeams, EventResponse, FeedMessage, MatchResponse, VersionResponse};
pub use websocket::ScoringStream;
