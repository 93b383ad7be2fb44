//! Server list response pipeline.
//!
//! Ties the other crates together for one inbound list request:
//!
//! 1. attribute the request to a [`CachedPlayer`] by address, or fall back
//!    to the configured unknown player
//! 2. select a profile and resolve its layer chain
//! 3. substitute placeholders through the shared registry
//! 4. let [`ServerListListener`]s inspect, replace or cancel the result
//!
//! The network listener that receives pings and encodes the response lives
//! outside this crate; it calls [`ServerListPipeline::handle`] and applies
//! the returned [`ServerListOutcome`].
//!
//! [`CachedPlayer`]: serverlist_types::CachedPlayer

mod cache;
mod config;
mod error;
mod event;
mod pipeline;

pub use cache::PlayerCache;
pub use config::{CoreConfig, DEFAULT_UNKNOWN_PLAYER_UUID, UnknownPlayerConfig};
pub use error::{CoreError, CoreResult};
pub use event::{PreServerListSetEvent, ServerListListener};
pub use pipeline::{PingRequest, ProfileFilter, ServerListOutcome, ServerListPipeline};
