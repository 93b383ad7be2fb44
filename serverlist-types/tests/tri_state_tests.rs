use proptest::prelude::*;
use serverlist_types::TriState;

fn tri_state_strategy() -> impl Strategy<Value = TriState> {
    prop_oneof![
        Just(TriState::True),
        Just(TriState::False),
        Just(TriState::NotSet),
    ]
}

// ── resolve / value_or ───────────────────────────────────────────

#[test]
fn resolve_maps_each_input() {
    assert_eq!(TriState::resolve(None), TriState::NotSet);
    assert_eq!(TriState::resolve(Some(true)), TriState::True);
    assert_eq!(TriState::resolve(Some(false)), TriState::False);
}

#[test]
fn value_or_uses_default_only_when_not_set() {
    assert!(TriState::NotSet.value_or(true));
    assert!(!TriState::NotSet.value_or(false));
    assert!(TriState::True.value_or(false));
    assert!(!TriState::False.value_or(true));
}

#[test]
fn default_is_not_set() {
    assert_eq!(TriState::default(), TriState::NotSet);
    assert!(TriState::default().is_not_set());
}

#[test]
fn conversions_from_bool_and_option() {
    assert_eq!(TriState::from(true), TriState::True);
    assert_eq!(TriState::from(Some(false)), TriState::False);
    assert_eq!(TriState::from(None::<bool>), TriState::NotSet);
    assert_eq!(Option::<bool>::from(TriState::True), Some(true));
}

#[test]
fn display() {
    assert_eq!(TriState::True.to_string(), "true");
    assert_eq!(TriState::False.to_string(), "false");
    assert_eq!(TriState::NotSet.to_string(), "not-set");
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_optional_bool() {
    assert_eq!(serde_json::to_string(&TriState::True).unwrap(), "true");
    assert_eq!(serde_json::to_string(&TriState::NotSet).unwrap(), "null");
    let parsed: TriState = serde_json::from_str("false").unwrap();
    assert_eq!(parsed, TriState::False);
    let parsed: TriState = serde_json::from_str("null").unwrap();
    assert_eq!(parsed, TriState::NotSet);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolve_of_value_or_is_identity_when_set(t in tri_state_strategy(), d in any::<bool>()) {
        prop_assume!(!t.is_not_set());
        prop_assert_eq!(TriState::resolve(Some(t.value_or(d))), t);
    }

    #[test]
    fn not_set_always_yields_default(d in any::<bool>()) {
        prop_assert_eq!(TriState::NotSet.value_or(d), d);
    }

    #[test]
    fn as_option_round_trips(t in tri_state_strategy()) {
        prop_assert_eq!(TriState::resolve(t.as_option()), t);
    }
}
