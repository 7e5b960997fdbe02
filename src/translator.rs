//! Notification-to-outcome translation pipeline.
//!
//! One [`Translator::handle`] call per raw notification: decide whether the
//! notification is actionable, perform exactly one lookup for the full match
//! data, resolve each alliance's outcome, and fan one publication out per
//! rostered team. The translator holds no mutable state, so a single
//! instance can serve concurrent notifications.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{
    EventCode, MatchResult, Notification, Outcome, Publication, UpdateType,
};
use crate::error::{LookupError, Result};
use crate::port::{MatchLookup, Publisher};

/// Translates raw feed notifications into per-team outcome publications.
pub struct Translator {
    event: EventCode,
    lookup: Arc<dyn MatchLookup>,
    publisher: Arc<dyn Publisher>,
}

impl Translator {
    /// Create a translator for one event.
    pub fn new(
        event: EventCode,
        lookup: Arc<dyn MatchLookup>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            event,
            lookup,
            publisher,
        }
    }

    /// The event this translator serves.
    #[must_use]
    pub fn event(&self) -> &EventCode {
        &self.event
    }

    /// Process one notification, returning the publications it produced.
    ///
    /// Non-actionable notifications (the keepalive sentinel, any update type
    /// other than a match post, a match post naming no match) produce an
    /// empty sequence without a lookup call. An actionable notification
    /// triggers exactly one lookup; if it fails or returns a result scored
    /// for neither alliance, the error propagates and nothing is published.
    /// Partial results are never published from an incomplete lookup.
    ///
    /// Each publication is handed to the bus individually. A failed publish
    /// is logged and isolated; the remaining fan-out is still attempted.
    pub async fn handle(&self, notification: &Notification) -> Result<Vec<Publication>> {
        let number = match notification {
            Notification::Keepalive => return Ok(Vec::new()),
            Notification::Update {
                update_type,
                match_number,
            } => {
                if *update_type != UpdateType::MatchPost {
                    debug!(event = %self.event, update_type = ?update_type, "Ignoring update");
                    return Ok(Vec::new());
                }
                match match_number {
                    Some(number) => *number,
                    None => {
                        warn!(event = %self.event, "Match post without a match number, skipping");
                        return Ok(Vec::new());
                    }
                }
            }
        };

        let result = self.lookup.fetch_match(&self.event, number).await?;
        if !result.is_scored() {
            return Err(LookupError::Unscored { number }.into());
        }

        let (red_outcome, blue_outcome) = Outcome::resolve(result.red_score, result.blue_score);
        debug!(
            event = %self.event,
            number = %number,
            red = %red_outcome,
            blue = %blue_outcome,
            "Match outcomes resolved"
        );

        let publications = fan_out(&result, red_outcome, blue_outcome);
        for publication in &publications {
            if let Err(e) = self
                .publisher
                .publish(&publication.topic, &publication.payload)
                .await
            {
                error!(
                    bus = self.publisher.bus_name(),
                    topic = %publication.topic,
                    error = %e,
                    "Publish failed"
                );
            }
        }

        Ok(publications)
    }
}

/// Emit one publication per rostered team, red slots before blue slots.
///
/// Slot order is fixed (red 1-3, then blue 1-3) so repeated translation of
/// the same match yields an identical sequence.
fn fan_out(result: &MatchResult, red: Outcome, blue: Outcome) -> Vec<Publication> {
    result
        .red
        .teams()
        .map(|team| Publication::for_team(team, red))
        .chain(
            result
                .blue
                .teams()
                .map(|team| Publication::for_team(team, blue)),
        )
        .collect()
}
