//! Match lookup port.

use async_trait::async_trait;

use crate::domain::{EventCode, MatchNumber, MatchResult};
use crate::error::Error;

/// Resolves a match reference into full scoring data.
///
/// The request is keyed by event code plus match number; the response may be
/// missing any field, which implementations surface as `Option`s on
/// [`MatchResult`] rather than failing.
#[async_trait]
pub trait MatchLookup: Send + Sync {
    /// Fetch the full result for one match of an event.
    async fn fetch_match(
        &self,
        event: &EventCode,
        number: MatchNumber,
    ) -> Result<MatchResult, Error>;

    /// Get the lookup source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
