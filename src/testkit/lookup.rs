//! Mock [`MatchLookup`] implementations for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{EventCode, MatchNumber, MatchResult};
use crate::error::{Error, LookupError};
use crate::port::MatchLookup;

/// A lookup that always returns a clone of one fixed result.
///
/// Calls are counted so tests can assert how many lookups a notification
/// triggered (exactly one when actionable, zero otherwise).
pub struct FixedLookup {
    result: MatchResult,
    calls: Arc<AtomicU32>,
}

impl FixedLookup {
    pub fn new(result: MatchResult) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Get a shared counter for asserting lookup call counts.
    pub fn call_counter(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchLookup for FixedLookup {
    async fn fetch_match(
        &self,
        _event: &EventCode,
        _number: MatchNumber,
    ) -> Result<MatchResult, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

/// A lookup that always fails, simulating an unreachable scoring server.
pub struct FailingLookup {
    calls: Arc<AtomicU32>,
}

impl FailingLookup {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FailingLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchLookup for FailingLookup {
    async fn fetch_match(
        &self,
        _event: &EventCode,
        _number: MatchNumber,
    ) -> Result<MatchResult, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LookupError::MalformedResponse {
            reason: "simulated lookup failure".into(),
        }
        .into())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
