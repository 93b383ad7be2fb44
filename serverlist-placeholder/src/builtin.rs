//! Placeholders available without any extension.
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `${player name}` | player name |
//! | `${player protocol}` | protocol version number |
//! | `${player uuid}` | unique id |
//! | `${player version}` | client version text, when the host knows it |
//! | `${player hasPlayedBefore}` | `true`/`false`, when known |
//! | `${player isBanned}` | `true`/`false`, when known |
//! | `${player isWhitelisted}` | `true`/`false`, when known |
//! | `${server playersOnline}` | online player count |
//! | `${server playersMax}` | maximum player count |
//! | `${server host}` | host the client connected through, when known |
//! | `${server serverCount}` | number of worlds or backend servers |

use crate::error::PlaceholderResult;
use crate::handler::PlaceholderHandler;
use crate::registry::PlaceholderRegistry;
use serverlist_types::{PlayerContext, ServerContext};
use std::sync::Arc;

pub const PLAYER_IDENTIFIER: &str = "player";
pub const SERVER_IDENTIFIER: &str = "server";

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerPlaceholders;

impl PlaceholderHandler for PlayerPlaceholders {
    fn parse(&self, expression: &str, player: &PlayerContext, _: &ServerContext) -> Option<String> {
        match expression.trim() {
            "name" => Some(player.name.clone()),
            "protocol" => Some(player.protocol.to_string()),
            "uuid" => Some(player.uuid.to_string()),
            "version" => player.version.clone(),
            "hasPlayedBefore" => player.played_before.map(|b| b.to_string()),
            "isBanned" => player.banned.map(|b| b.to_string()),
            "isWhitelisted" => player.whitelisted.map(|b| b.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerPlaceholders;

impl PlaceholderHandler for ServerPlaceholders {
    fn parse(&self, expression: &str, _: &PlayerContext, server: &ServerContext) -> Option<String> {
        match expression.trim() {
            "playersOnline" => Some(server.players_online.to_string()),
            "playersMax" => Some(server.players_max.to_string()),
            "host" => server.host.clone(),
            "serverCount" => Some(server.sub_servers.len().to_string()),
            _ => None,
        }
    }
}

/// Registers the `player` and `server` placeholders.
pub fn register_builtin(registry: &PlaceholderRegistry) -> PlaceholderResult<()> {
    registry.register(PLAYER_IDENTIFIER, Arc::new(PlayerPlaceholders))?;
    registry.register(SERVER_IDENTIFIER, Arc::new(ServerPlaceholders))?;
    Ok(())
}
