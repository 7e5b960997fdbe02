//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the translation core and its external
//! collaborators. Adapters implement them to integrate the concrete scoring
//! server and broker:
//!
//! - [`NotificationStream`] - the push feed delivering raw notifications
//! - [`MatchLookup`] - resolves a match reference into full scoring data
//! - [`Publisher`] - delivers (topic, payload) pairs to bus subscribers

mod lookup;
mod publisher;
mod stream;

pub use lookup::MatchLookup;
pub use publisher::Publisher;
pub use stream::NotificationStream;
