//! Feed-agnostic domain types: identifiers, notifications, match data,
//! outcomes, and publications.
//!
//! Nothing in this module performs I/O; the translation pipeline's pure data
//! shaping lives here so it can be tested without collaborators.

pub mod id;
pub mod match_result;
pub mod notification;
pub mod outcome;
pub mod publication;

pub use id::{EventCode, MatchNumber, TeamId};
pub use match_result::{Alliance, MatchResult};
pub use notification::{Notification, UpdateType};
pub use outcome::Outcome;
pub use publication::Publication;
