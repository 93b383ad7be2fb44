use crate::PlayerContext;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The last known identity behind a client address.
///
/// Recorded when a client actually joins, so later pings from the same
/// address can be attributed to a name before any login happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CachedPlayer {
    pub address: String,
    pub name: String,
    pub uuid: Uuid,
}

impl CachedPlayer {
    pub fn new(address: impl Into<String>, name: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            uuid,
        }
    }

    /// Builds a request context for this player pinging with `protocol`.
    ///
    /// A cached player has joined at least once.
    pub fn to_context(&self, protocol: i32) -> PlayerContext {
        PlayerContext::new(self.name.clone(), protocol, self.uuid).with_played_before(true)
    }
}
