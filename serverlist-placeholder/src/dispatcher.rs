//! Substitution of `${identifier expression}` spans.
//!
//! A single left-to-right pass: handler output is never rescanned. Spans
//! whose identifier is unknown, or whose handler returns `None`, are copied
//! verbatim. An unterminated `${` is kept as is, and a `${` opened before
//! the current span closes restarts the scan at that inner `${`.

use crate::registry::PlaceholderRegistry;
use serverlist_types::{PlayerContext, ProfileEntry, ServerContext};
use tracing::trace;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Rewrites every resolvable placeholder in `text`.
pub fn replace_placeholders(
    registry: &PlaceholderRegistry,
    text: &str,
    player: &PlayerContext,
    server: &ServerContext,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let inner = &rest[start + OPEN.len()..];

        let Some(close) = inner.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };
        let body = &inner[..close];

        if let Some(nested) = body.find(OPEN) {
            out.push_str(&rest[start..start + OPEN.len() + nested]);
            rest = &inner[nested..];
            continue;
        }

        match resolve_body(registry, body, player, server) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + OPEN.len() + close + CLOSE.len_utf8()]),
        }
        rest = &inner[close + CLOSE.len_utf8()..];
    }

    out.push_str(rest);
    out
}

/// Rewrites the text fields of `entry`, in the order motd, players,
/// player count text, favicon. Flags and the count are carried over.
pub fn dispatch_entry(
    registry: &PlaceholderRegistry,
    entry: &ProfileEntry,
    player: &PlayerContext,
    server: &ServerContext,
) -> ProfileEntry {
    let replace = |text: &str| replace_placeholders(registry, text, player, server);

    let motd: Vec<String> = entry.motd().iter().map(|line| replace(line)).collect();
    let players: Vec<String> = entry.players().iter().map(|line| replace(line)).collect();
    let player_count_text = entry.player_count_text().map(replace).unwrap_or_default();
    let favicon = entry.favicon().map(replace).unwrap_or_default();

    entry
        .to_builder()
        .motd(motd)
        .players(players)
        .player_count_text(player_count_text)
        .favicon(favicon)
        .build()
}

/// Splits `identifier rest` on the first whitespace run and asks the handler.
fn resolve_body(
    registry: &PlaceholderRegistry,
    body: &str,
    player: &PlayerContext,
    server: &ServerContext,
) -> Option<String> {
    let (identifier, expression) = split_body(body);
    if identifier.is_empty() {
        return None;
    }
    let Some(handler) = registry.lookup(identifier) else {
        trace!(identifier, "No placeholder provider registered");
        return None;
    };
    let value = handler.parse(expression, player, server);
    if value.is_none() {
        trace!(identifier, expression, "Placeholder provider returned no value");
    }
    value
}

fn split_body(body: &str) -> (&str, &str) {
    match body.find(char::is_whitespace) {
        Some(i) => (&body[..i], body[i..].trim_start()),
        None => (body, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_first_whitespace_run() {
        assert_eq!(split_body("player name"), ("player", "name"));
        assert_eq!(split_body("player \t name extra"), ("player", "name extra"));
        assert_eq!(split_body("player"), ("player", ""));
        assert_eq!(split_body(" player name"), ("", "player name"));
        assert_eq!(split_body(""), ("", ""));
    }
}
