//! The resolved display configuration of one server list response.

use crate::{Error, Result, TriState};
use serde::{Deserialize, Serialize};

/// Number of MOTD lines a client renders. Extra lines are dropped.
pub const MAX_MOTD_LINES: usize = 2;

/// Immutable display configuration: MOTD, hover lines, player count text,
/// favicon and the player count flags.
///
/// Empty strings and empty lists mean "not specified". Instances are only
/// produced through [`ProfileEntryBuilder`] (or [`ProfileEntry::try_new`]),
/// so the MOTD never holds more than [`MAX_MOTD_LINES`] lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileEntryBuilder")]
pub struct ProfileEntry {
    motd: Vec<String>,
    players: Vec<String>,
    player_count_text: String,
    favicon: String,
    hide_players_enabled: TriState,
    extra_players_enabled: TriState,
    extra_players_count: Option<i32>,
}

impl ProfileEntry {
    /// Checked constructor for callers bridging nullable data.
    ///
    /// `motd`, `players` and both flags are required; the text fields and the
    /// count may be absent.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        motd: Option<Vec<String>>,
        players: Option<Vec<String>>,
        player_count_text: Option<String>,
        favicon: Option<String>,
        hide_players_enabled: Option<TriState>,
        extra_players_enabled: Option<TriState>,
        extra_players_count: Option<i32>,
    ) -> Result<Self> {
        let motd = motd.ok_or(Error::InvalidArgument("motd"))?;
        let players = players.ok_or(Error::InvalidArgument("players"))?;
        let hide = hide_players_enabled.ok_or(Error::InvalidArgument("hide_players_enabled"))?;
        let extra =
            extra_players_enabled.ok_or(Error::InvalidArgument("extra_players_enabled"))?;

        Ok(ProfileEntryBuilder::new()
            .motd(motd)
            .players(players)
            .player_count_text(player_count_text.unwrap_or_default())
            .favicon(favicon.unwrap_or_default())
            .hide_players_enabled(hide)
            .extra_players_enabled(extra)
            .extra_players_count(extra_players_count)
            .build())
    }

    /// The canonical zero value, used as the root of a merge chain.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> ProfileEntryBuilder {
        ProfileEntryBuilder::new()
    }

    /// Returns a builder seeded with this entry's values.
    #[must_use]
    pub fn to_builder(&self) -> ProfileEntryBuilder {
        ProfileEntryBuilder::from_entry(self)
    }

    /// Produces a structurally equal, independent entry.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.to_builder().build()
    }

    pub fn motd(&self) -> &[String] {
        &self.motd
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// The player count override, or `None` when empty.
    pub fn player_count_text(&self) -> Option<&str> {
        non_empty(&self.player_count_text)
    }

    /// The favicon reference (URL, file name or placeholder), or `None` when empty.
    pub fn favicon(&self) -> Option<&str> {
        non_empty(&self.favicon)
    }

    pub fn hide_players_enabled(&self) -> TriState {
        self.hide_players_enabled
    }

    pub fn extra_players_enabled(&self) -> TriState {
        self.extra_players_enabled
    }

    pub fn extra_players_count(&self) -> Option<i32> {
        self.extra_players_count
    }

    /// True when nothing in this entry would change the response.
    pub fn is_invalid(&self) -> bool {
        self.motd.is_empty()
            && self.players.is_empty()
            && (self.player_count_text.is_empty() && !self.hide_players_enabled.value_or(false))
            && self.favicon.is_empty()
    }

    /// The maximum player count to display for the given real counts.
    ///
    /// With extra players enabled and a count set, the maximum becomes
    /// `online + count`; otherwise the real maximum is kept.
    pub fn max_players(&self, online: i32, max: i32) -> i32 {
        match self.extra_players_count {
            Some(extra) if self.extra_players_enabled.value_or(false) => {
                online.saturating_add(extra)
            }
            _ => max,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Mutable staging area for a [`ProfileEntry`].
///
/// [`build`](Self::build) borrows the builder, so one builder can stamp out
/// several entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileEntryBuilder {
    motd: Vec<String>,
    players: Vec<String>,
    player_count_text: String,
    favicon: String,
    hide_players_enabled: TriState,
    extra_players_enabled: TriState,
    extra_players_count: Option<i32>,
}

impl ProfileEntryBuilder {
    /// Creates an empty builder: no lines, empty text, flags not set, no count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding a copy of `entry`.
    pub fn from_entry(entry: &ProfileEntry) -> Self {
        Self {
            motd: entry.motd.clone(),
            players: entry.players.clone(),
            player_count_text: entry.player_count_text.clone(),
            favicon: entry.favicon.clone(),
            hide_players_enabled: entry.hide_players_enabled,
            extra_players_enabled: entry.extra_players_enabled,
            extra_players_count: entry.extra_players_count,
        }
    }

    /// Sets the MOTD, keeping at most [`MAX_MOTD_LINES`] lines.
    pub fn motd<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.motd = lines
            .into_iter()
            .take(MAX_MOTD_LINES)
            .map(Into::into)
            .collect();
        self
    }

    pub fn players<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn player_count_text(mut self, text: impl Into<String>) -> Self {
        self.player_count_text = text.into();
        self
    }

    pub fn favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = favicon.into();
        self
    }

    pub fn hide_players_enabled(mut self, value: impl Into<TriState>) -> Self {
        self.hide_players_enabled = value.into();
        self
    }

    pub fn extra_players_enabled(mut self, value: impl Into<TriState>) -> Self {
        self.extra_players_enabled = value.into();
        self
    }

    pub fn extra_players_count(mut self, count: Option<i32>) -> Self {
        self.extra_players_count = count;
        self
    }

    /// Produces a new immutable entry from the staged values.
    pub fn build(&self) -> ProfileEntry {
        ProfileEntry {
            motd: self.motd.iter().take(MAX_MOTD_LINES).cloned().collect(),
            players: self.players.clone(),
            player_count_text: self.player_count_text.clone(),
            favicon: self.favicon.clone(),
            hide_players_enabled: self.hide_players_enabled,
            extra_players_enabled: self.extra_players_enabled,
            extra_players_count: self.extra_players_count,
        }
    }
}

impl From<ProfileEntryBuilder> for ProfileEntry {
    fn from(builder: ProfileEntryBuilder) -> Self {
        builder.build()
    }
}
