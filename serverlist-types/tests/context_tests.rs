use serverlist_types::{CachedPlayer, PlayerContext, ServerContext};
use uuid::Uuid;

// ── PlayerContext ────────────────────────────────────────────────

#[test]
fn new_player_has_only_identity() {
    let uuid = Uuid::new_v4();
    let player = PlayerContext::new("Steve", 765, uuid);
    assert_eq!(player.name, "Steve");
    assert_eq!(player.protocol, 765);
    assert_eq!(player.uuid, uuid);
    assert_eq!(player.version, None);
    assert_eq!(player.played_before, None);
    assert_eq!(player.banned, None);
    assert_eq!(player.whitelisted, None);
}

#[test]
fn anonymous_player_has_not_played_before() {
    let player = PlayerContext::anonymous("Anonymous", Uuid::nil(), 47);
    assert_eq!(player.played_before, Some(false));
    assert_eq!(player.protocol, 47);
}

#[test]
fn optional_accessors_are_chainable() {
    let player = PlayerContext::new("Alex", 765, Uuid::nil())
        .with_version("1.20.4")
        .with_banned(false)
        .with_whitelisted(true);
    assert_eq!(player.version.as_deref(), Some("1.20.4"));
    assert_eq!(player.banned, Some(false));
    assert_eq!(player.whitelisted, Some(true));
}

#[test]
fn player_json_skips_unknown_fields() {
    let player = PlayerContext::new("Steve", 765, Uuid::nil());
    let json = serde_json::to_value(&player).unwrap();
    assert!(json.get("version").is_none());
    assert!(json.get("banned").is_none());
}

// ── ServerContext ────────────────────────────────────────────────

#[test]
fn server_context_builders() {
    let server = ServerContext::new(3, 20)
        .with_host("play.example.com")
        .with_sub_servers(["lobby", "survival"]);
    assert_eq!(server.players_online, 3);
    assert_eq!(server.players_max, 20);
    assert_eq!(server.host.as_deref(), Some("play.example.com"));
    assert_eq!(server.sub_servers.len(), 2);
}

// ── CachedPlayer ─────────────────────────────────────────────────

#[test]
fn cached_player_to_context() {
    let uuid = Uuid::new_v4();
    let cached = CachedPlayer::new("127.0.0.1", "Steve", uuid);
    let ctx = cached.to_context(765);
    assert_eq!(ctx.name, "Steve");
    assert_eq!(ctx.uuid, uuid);
    assert_eq!(ctx.protocol, 765);
    assert_eq!(ctx.played_before, Some(true));
}

#[test]
fn cached_player_json_round_trip() {
    let cached = CachedPlayer::new("10.0.0.2", "Alex", Uuid::new_v4());
    let json = serde_json::to_string(&cached).unwrap();
    let parsed: CachedPlayer = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cached);
}
