//! Scorebridge - live event-scoring feed to message bus bridge.
//!
//! Listens to a competition-management server's push stream, resolves each
//! posted match into full scoring data over REST, and publishes one
//! win/loss/tie message per rostered team to an MQTT broker.
//!
//! # Architecture
//!
//! The crate keeps the translation pipeline free of I/O by putting traits at
//! the collaborator seams:
//!
//! - **`domain`** - Feed-agnostic types: notifications, match data, outcomes,
//!   publications. [`domain::Outcome::resolve`] is the pure win/loss/tie
//!   comparison.
//! - **`port`** - The collaborator contracts: [`port::NotificationStream`],
//!   [`port::MatchLookup`], [`port::Publisher`].
//! - **`translator`** - The core pipeline: one notification in, up to six
//!   publications out, exactly one lookup per actionable notification.
//! - **`adapter`** - Concrete collaborators: the scoring server REST client
//!   and websocket stream, and the MQTT publisher.
//! - **`app`** - Startup checks and the per-event stream tasks.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Domain types and outcome resolution
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for the collaborator seams
//! - [`adapter`] - Scoring server and broker adapters
//! - [`translator`] - Notification-to-outcome translation pipeline
//! - [`app`] - Application orchestration
//!
//! # Features
//!
//! - `testkit` - Test doubles for the ports, shared by unit and integration
//!   tests

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod translator;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
