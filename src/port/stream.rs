//! Feed stream port.

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::Error;

/// Push-notification stream from the scoring feed.
///
/// Implementations handle connection management and message parsing for
/// their specific transport. The stream is a lazy, potentially infinite,
/// non-restartable sequence: once `next_notification` returns `None` the
/// stream is closed and will not produce again. Callers wanting a fresh
/// stream construct a new one.
#[async_trait]
pub trait NotificationStream: Send {
    /// Connect to the feed.
    async fn connect(&mut self) -> Result<(), Error>;

    /// Receive the next notification.
    ///
    /// Blocks until a notification is available or the connection closes.
    /// Returns `None` when the stream is closed.
    async fn next_notification(&mut self) -> Option<Notification>;

    /// Get the source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
