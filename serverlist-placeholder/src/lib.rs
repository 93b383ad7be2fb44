//! Placeholder registry and dispatcher.
//!
//! Extensions bind an identifier to a [`PlaceholderHandler`] in a
//! [`PlaceholderRegistry`]. At response time the dispatcher rewrites every
//! `${identifier expression}` span whose handler produces a value and
//! leaves everything else untouched.

pub mod builtin;
mod dispatcher;
mod error;
mod handler;
mod registry;

pub use builtin::{PlayerPlaceholders, ServerPlaceholders, register_builtin};
pub use dispatcher::{dispatch_entry, replace_placeholders};
pub use error::{PlaceholderError, PlaceholderResult};
pub use handler::PlaceholderHandler;
pub use registry::{PlaceholderRegistry, normalize_identifier};
