//! Core value types for server list customization.
//!
//! This crate defines the plain data shared by every other crate:
//! - [`TriState`], the three-valued flag used for overridable booleans
//! - [`ProfileEntry`] and its [`ProfileEntryBuilder`]
//! - the request context handed to placeholder handlers
//!   ([`PlayerContext`], [`ServerContext`])
//! - [`CachedPlayer`], the durable record of a previously seen client
//!
//! Nothing here performs I/O or holds shared state.

mod cached;
mod context;
mod entry;
mod tri_state;

pub use cached::CachedPlayer;
pub use context::{PlayerContext, ServerContext};
pub use entry::{MAX_MOTD_LINES, ProfileEntry, ProfileEntryBuilder};
pub use tri_state::TriState;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing value types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was absent.
    #[error("invalid argument: {0} may not be absent")]
    InvalidArgument(&'static str),
}
