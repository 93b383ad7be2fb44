//! Profile layering for server list customization.
//!
//! A response is configured by a chain of [`ProfileEntry`] layers: the global
//! defaults first, then the selected profile, then optionally one of its
//! variants. [`resolve`] collapses such a chain into one effective entry.
//!
//! - [`resolver`] — the field-level merge rules
//! - [`ProfileLayer`] — the configuration shape of one layer
//! - [`ServerListProfile`] / [`ProfileSet`] — named, prioritized profiles
//!
//! [`ProfileEntry`]: serverlist_types::ProfileEntry

mod error;
mod layer;
mod profile;
pub mod resolver;

pub use error::{ProfileError, ProfileResult};
pub use layer::{ExtraPlayersLayer, PlayerCountLayer, ProfileLayer};
pub use profile::{ProfileSet, ProfileSetConfig, ServerListProfile, ServerListProfileConfig};
pub use resolver::{merge_into, resolve};
