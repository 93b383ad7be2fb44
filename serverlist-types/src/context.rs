//! Request context handed to placeholder handlers.
//!
//! Host adapters fill in what their platform knows. The three identity
//! fields of a player and the two counts of a server are always present;
//! everything else is optional and left `None` (or empty) when the host
//! cannot provide it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The client probing the server list, as far as it is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContext {
    pub name: String,
    pub protocol: i32,
    pub uuid: Uuid,
    /// Human readable client version (e.g. "1.20.4"), proxies only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_before: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelisted: Option<bool>,
}

impl PlayerContext {
    /// Creates a context carrying only the identity triple.
    pub fn new(name: impl Into<String>, protocol: i32, uuid: Uuid) -> Self {
        Self {
            name: name.into(),
            protocol,
            uuid,
            version: None,
            played_before: None,
            banned: None,
            whitelisted: None,
        }
    }

    /// Context for a client whose identity is not cached yet.
    pub fn anonymous(name: impl Into<String>, uuid: Uuid, protocol: i32) -> Self {
        Self {
            played_before: Some(false),
            ..Self::new(name, protocol, uuid)
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_played_before(mut self, played_before: bool) -> Self {
        self.played_before = Some(played_before);
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    pub fn with_whitelisted(mut self, whitelisted: bool) -> Self {
        self.whitelisted = Some(whitelisted);
        self
    }
}

/// The server (or proxy) answering the list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerContext {
    pub players_online: i32,
    pub players_max: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Worlds of a game server, or backend servers of a proxy.
    #[serde(default)]
    pub sub_servers: Vec<String>,
}

impl ServerContext {
    pub fn new(players_online: i32, players_max: i32) -> Self {
        Self {
            players_online,
            players_max,
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_sub_servers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_servers = names.into_iter().map(Into::into).collect();
        self
    }
}
