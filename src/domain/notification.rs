//! Update notifications delivered by the feed stream.

use serde::Deserialize;

use crate::domain::id::MatchNumber;

/// Tag identifying what a feed update describes.
///
/// Only [`UpdateType::MatchPost`] triggers translation; every other tag is a
/// no-op for this bridge. Tags the server may add later deserialize as
/// `Unknown` rather than failing the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateType {
    MatchLoad,
    MatchStart,
    MatchAbort,
    MatchCommit,
    MatchPost,
    ShowPreview,
    ShowRandom,
    ShowMatch,
    #[serde(other)]
    Unknown,
}

/// A single push message from the feed.
///
/// Transient: exists only for the duration of one dispatch through the
/// translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The stream's literal keepalive sentinel. Carries no update.
    Keepalive,
    /// A feed state change.
    Update {
        update_type: UpdateType,
        /// The match the update refers to, when the payload names one.
        match_number: Option<MatchNumber>,
    },
}

impl Notification {
    /// Convenience constructor for an update notification.
    #[must_use]
    pub fn update(update_type: UpdateType, match_number: Option<MatchNumber>) -> Self {
        Self::Update {
            update_type,
            match_number,
        }
    }
}
