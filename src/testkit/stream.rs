//! Mock [`NotificationStream`] implementations for testing.
//!
//! - [`ScriptedStream`] — Pre-loaded connect results and notifications.
//!   Best for: translation loops over a fixed frame sequence.
//!
//! - [`ChannelStream`] — Channel-backed stream with external control handle.
//!   Best for: pipeline tests needing on-demand notification delivery.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::Result;
use crate::port::NotificationStream;

// ---------------------------------------------------------------------------
// ScriptedStream
// ---------------------------------------------------------------------------

/// A mock stream with scripted connect results and a fixed notification
/// queue.
///
/// Each call to `connect()` pops the next result from its queue (defaults to
/// `Ok(())` when exhausted); `next_notification()` pops the next entry, and
/// an exhausted queue means the stream is closed.
pub struct ScriptedStream {
    connect_results: VecDeque<Result<()>>,
    notifications: VecDeque<Option<Notification>>,
    connect_count: Arc<AtomicU32>,
}

impl ScriptedStream {
    pub fn new() -> Self {
        Self {
            connect_results: VecDeque::new(),
            notifications: VecDeque::new(),
            connect_count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_connect_results(mut self, results: Vec<Result<()>>) -> Self {
        self.connect_results = results.into();
        self
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications.into_iter().map(Some).collect();
        self
    }

    /// Get a shared counter for asserting connect call counts.
    pub fn connect_counter(&self) -> Arc<AtomicU32> {
        self.connect_count.clone()
    }

    pub fn connect_count(&self) -> u32 {
        self.connect_count.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedStream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationStream for ScriptedStream {
    async fn connect(&mut self) -> Result<()> {
        self.connect_count.fetch_add(1, Ordering::SeqCst);
        self.connect_results.pop_front().unwrap_or(Ok(()))
    }

    async fn next_notification(&mut self) -> Option<Notification> {
        self.notifications.pop_front().flatten()
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

// ---------------------------------------------------------------------------
// ChannelStream
// ---------------------------------------------------------------------------

/// A mock stream controlled externally via a [`ChannelStreamHandle`].
///
/// Notifications are sent into the handle and read by the consumer via
/// `next_notification()`. No real network I/O.
pub struct ChannelStream {
    notification_rx: tokio::sync::mpsc::Receiver<Option<Notification>>,
    connect_count: Arc<AtomicU32>,
}

/// Control handle for a [`ChannelStream`].
pub struct ChannelStreamHandle {
    notification_tx: tokio::sync::mpsc::Sender<Option<Notification>>,
    connect_count: Arc<AtomicU32>,
}

impl ChannelStreamHandle {
    /// Send a notification to the stream.
    pub async fn send(&self, notification: Notification) {
        let _ = self.notification_tx.send(Some(notification)).await;
    }

    /// Signal end-of-stream (causes `next_notification` to return `None`).
    pub async fn close(&self) {
        let _ = self.notification_tx.send(None).await;
    }

    /// How many times `connect()` was called.
    pub fn connect_count(&self) -> u32 {
        self.connect_count.load(Ordering::SeqCst)
    }
}

/// Create a [`ChannelStream`] and its control [`ChannelStreamHandle`].
pub fn channel_stream(buffer: usize) -> (ChannelStream, ChannelStreamHandle) {
    let (tx, rx) = tokio::sync::mpsc::channel(buffer);
    let connect_count = Arc::new(AtomicU32::new(0));
    (
        ChannelStream {
            notification_rx: rx,
            connect_count: connect_count.clone(),
        },
        ChannelStreamHandle {
            notification_tx: tx,
            connect_count,
        },
    )
}

#[async_trait]
impl NotificationStream for ChannelStream {
    async fn connect(&mut self) -> Result<()> {
        self.connect_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn next_notification(&mut self) -> Option<Notification> {
        match self.notification_rx.recv().await {
            Some(Some(notification)) => Some(notification),
            Some(None) | None => None,
        }
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
