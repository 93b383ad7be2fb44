//! Pipeline configuration parsed from TOML.
//!
//! ```toml
//! [unknown-player]
//! name = "Anonymous"
//! uuid = "606e2ff0-ed77-4842-9d6c-e1d3321c7838"
//!
//! [defaults]
//! motd = ["<aqua>Example Network"]
//!
//! [[profiles]]
//! name = "event"
//! priority = 10
//! ```
//!
//! Reading the file and reloading it are left to the host.

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use serverlist_profile::{ProfileSet, ProfileSetConfig};
use serverlist_types::PlayerContext;
use uuid::{Uuid, uuid};

/// Unique id reported for players whose address is not cached.
pub const DEFAULT_UNKNOWN_PLAYER_UUID: Uuid = uuid!("606e2ff0-ed77-4842-9d6c-e1d3321c7838");

/// Identity used when a ping cannot be attributed to a cached player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownPlayerConfig {
    #[serde(default = "default_unknown_name")]
    pub name: String,
    #[serde(default = "default_unknown_uuid")]
    pub uuid: Uuid,
}

fn default_unknown_name() -> String {
    "Anonymous".to_string()
}

fn default_unknown_uuid() -> Uuid {
    DEFAULT_UNKNOWN_PLAYER_UUID
}

impl Default for UnknownPlayerConfig {
    fn default() -> Self {
        Self {
            name: default_unknown_name(),
            uuid: default_unknown_uuid(),
        }
    }
}

impl UnknownPlayerConfig {
    pub fn to_context(&self, protocol: i32) -> PlayerContext {
        PlayerContext::anonymous(self.name.clone(), self.uuid, protocol)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CoreConfig {
    pub unknown_player: UnknownPlayerConfig,
    #[serde(flatten)]
    pub profiles: ProfileSetConfig,
}

impl CoreConfig {
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the profile set, rejecting duplicate profile names.
    pub fn profile_set(&self) -> CoreResult<ProfileSet> {
        Ok(ProfileSet::from_config(&self.profiles)?)
    }
}
