//! Bus publisher port.

use async_trait::async_trait;

use crate::error::Error;

/// Hands (topic, payload) pairs to the message bus.
///
/// Fire-and-forget: callers consume no response, and a failed publish to one
/// topic must not affect publishes to sibling topics.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one payload to one topic.
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), Error>;

    /// Get the bus name for logging/debugging.
    fn bus_name(&self) -> &'static str;
}
