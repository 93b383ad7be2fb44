use serverlist_placeholder::{
    PlaceholderHandler, PlaceholderRegistry, PlayerPlaceholders, ServerPlaceholders,
    register_builtin,
};
use serverlist_types::{PlayerContext, ServerContext};
use uuid::Uuid;

fn full_player() -> PlayerContext {
    PlayerContext::new("Alex", 47, Uuid::nil())
        .with_version("1.8.9")
        .with_played_before(true)
        .with_banned(false)
        .with_whitelisted(true)
}

// ── player ───────────────────────────────────────────────────────

#[test]
fn player_expressions() {
    let p = full_player();
    let s = ServerContext::default();
    let h = PlayerPlaceholders;
    assert_eq!(h.parse("name", &p, &s).as_deref(), Some("Alex"));
    assert_eq!(h.parse("protocol", &p, &s).as_deref(), Some("47"));
    assert_eq!(h.parse("uuid", &p, &s), Some(Uuid::nil().to_string()));
    assert_eq!(h.parse("version", &p, &s).as_deref(), Some("1.8.9"));
    assert_eq!(h.parse("hasPlayedBefore", &p, &s).as_deref(), Some("true"));
    assert_eq!(h.parse("isBanned", &p, &s).as_deref(), Some("false"));
    assert_eq!(h.parse("isWhitelisted", &p, &s).as_deref(), Some("true"));
}

#[test]
fn player_unknown_data_yields_none() {
    let p = PlayerContext::new("Alex", 47, Uuid::nil());
    let s = ServerContext::default();
    let h = PlayerPlaceholders;
    assert_eq!(h.parse("version", &p, &s), None);
    assert_eq!(h.parse("isBanned", &p, &s), None);
    assert_eq!(h.parse("", &p, &s), None);
    assert_eq!(h.parse("Name", &p, &s), None);
}

// ── server ───────────────────────────────────────────────────────

#[test]
fn server_expressions() {
    let p = full_player();
    let s = ServerContext::new(4, 100)
        .with_host("mc.example.org")
        .with_sub_servers(["lobby", "pvp", "skyblock"]);
    let h = ServerPlaceholders;
    assert_eq!(h.parse("playersOnline", &p, &s).as_deref(), Some("4"));
    assert_eq!(h.parse(" playersMax ", &p, &s).as_deref(), Some("100"));
    assert_eq!(h.parse("host", &p, &s).as_deref(), Some("mc.example.org"));
    assert_eq!(h.parse("serverCount", &p, &s).as_deref(), Some("3"));
}

#[test]
fn server_without_host_yields_none() {
    let h = ServerPlaceholders;
    assert_eq!(h.parse("host", &full_player(), &ServerContext::new(0, 0)), None);
}

// ── Registration ─────────────────────────────────────────────────

#[test]
fn register_builtin_binds_both_identifiers() {
    let registry = PlaceholderRegistry::new();
    register_builtin(&registry).unwrap();
    assert_eq!(registry.identifiers(), vec!["player".to_string(), "server".to_string()]);
}

#[test]
fn register_builtin_twice_fails() {
    let registry = PlaceholderRegistry::new();
    register_builtin(&registry).unwrap();
    assert!(register_builtin(&registry).is_err());
    assert_eq!(registry.len(), 2);
}
