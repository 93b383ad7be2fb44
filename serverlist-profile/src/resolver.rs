//! Cascading merge of profile layers.
//!
//! Each layer only overwrites what it actually specifies. Lists and strings
//! count as specified when non-empty; the two flags when they are not
//! [`TriState::NotSet`]; the count when it is `Some`. An empty override can
//! therefore never erase a value, while `false` stays expressible for the
//! flags.

use serverlist_types::{ProfileEntry, ProfileEntryBuilder, TriState};

/// Merges `layers` left to right (base first, most specific last).
///
/// An empty chain yields [`ProfileEntry::empty`].
pub fn resolve<'a, I>(layers: I) -> ProfileEntry
where
    I: IntoIterator<Item = &'a ProfileEntry>,
{
    layers
        .into_iter()
        .fold(ProfileEntryBuilder::new(), merge_into)
        .build()
}

/// Applies one override layer on top of the staged values.
pub fn merge_into(builder: ProfileEntryBuilder, layer: &ProfileEntry) -> ProfileEntryBuilder {
    let mut builder = builder;

    if !layer.motd().is_empty() {
        builder = builder.motd(layer.motd().iter().cloned());
    }
    if !layer.players().is_empty() {
        builder = builder.players(layer.players().iter().cloned());
    }
    if let Some(text) = layer.player_count_text() {
        builder = builder.player_count_text(text);
    }
    if let Some(favicon) = layer.favicon() {
        builder = builder.favicon(favicon);
    }
    if is_set(layer.hide_players_enabled()) {
        builder = builder.hide_players_enabled(layer.hide_players_enabled());
    }
    if is_set(layer.extra_players_enabled()) {
        builder = builder.extra_players_enabled(layer.extra_players_enabled());
    }
    if let Some(count) = layer.extra_players_count() {
        builder = builder.extra_players_count(Some(count));
    }

    builder
}

fn is_set(value: TriState) -> bool {
    !value.is_not_set()
}
