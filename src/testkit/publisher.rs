//! Mock [`Publisher`] implementation for testing.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::Publisher;

/// A publisher that records every attempted publish.
///
/// Individual topics can be made to fail, for asserting that one failing
/// target does not abort the remaining fan-out. Every call lands in
/// `attempts()`; only successful calls land in `published()`.
pub struct RecordingPublisher {
    attempts: Mutex<Vec<(String, String)>>,
    published: Mutex<Vec<(String, String)>>,
    failing_topics: Mutex<HashSet<String>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            published: Mutex::new(Vec::new()),
            failing_topics: Mutex::new(HashSet::new()),
        }
    }

    /// Make every publish to `topic` fail.
    pub fn fail_topic(&self, topic: impl Into<String>) {
        self.failing_topics.lock().unwrap().insert(topic.into());
    }

    /// All publish calls, in order, successful or not.
    pub fn attempts(&self) -> Vec<(String, String)> {
        self.attempts.lock().unwrap().clone()
    }

    /// Successful publishes, in order.
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

impl Default for RecordingPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<()> {
        self.attempts
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));

        if self.failing_topics.lock().unwrap().contains(topic) {
            return Err(Error::Broker(format!("simulated failure for {topic}")));
        }

        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));
        Ok(())
    }

    fn bus_name(&self) -> &'static str {
        "mock"
    }
}
