//! Configuration shape of a single profile layer.
//!
//! ```toml
//! motd = ["<aqua>Welcome back", "<gray>${player name}"]
//! players = ["Visit example.com"]
//! favicon = "${player uuid}"
//!
//! [player-count]
//! hide = false
//! text = "${server playersOnline}/${server playersMax}"
//!
//! [player-count.extra-players]
//! enabled = true
//! amount = 5
//! ```
//!
//! Every key is optional. A missing key leaves the field unspecified so the
//! layer below it shows through.

use serde::{Deserialize, Serialize};
use serverlist_types::{ProfileEntry, TriState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfileLayer {
    pub motd: Vec<String>,
    pub players: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub player_count: PlayerCountLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlayerCountLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub extra_players: ExtraPlayersLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtraPlayersLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

impl ProfileLayer {
    /// Converts the configured values into an immutable entry.
    pub fn to_entry(&self) -> ProfileEntry {
        ProfileEntry::builder()
            .motd(self.motd.iter().cloned())
            .players(self.players.iter().cloned())
            .player_count_text(self.player_count.text.clone().unwrap_or_default())
            .favicon(self.favicon.clone().unwrap_or_default())
            .hide_players_enabled(TriState::resolve(self.player_count.hide))
            .extra_players_enabled(TriState::resolve(self.player_count.extra_players.enabled))
            .extra_players_count(self.player_count.extra_players.amount)
            .build()
    }
}

impl From<&ProfileEntry> for ProfileLayer {
    fn from(entry: &ProfileEntry) -> Self {
        Self {
            motd: entry.motd().to_vec(),
            players: entry.players().to_vec(),
            favicon: entry.favicon().map(str::to_owned),
            player_count: PlayerCountLayer {
                hide: entry.hide_players_enabled().as_option(),
                text: entry.player_count_text().map(str::to_owned),
                extra_players: ExtraPlayersLayer {
                    enabled: entry.extra_players_enabled().as_option(),
                    amount: entry.extra_players_count(),
                },
            },
        }
    }
}
