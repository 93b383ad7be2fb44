//! Three-valued flag distinguishing "not set" from an explicit `false`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean that may also be left unset.
///
/// Serialized as an optional boolean: `true`, `false` or `null`/missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    True,
    False,
    #[default]
    NotSet,
}

impl TriState {
    /// Maps `None` to [`TriState::NotSet`] and a boolean to its variant.
    #[must_use]
    pub const fn resolve(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::NotSet,
        }
    }

    /// Returns the boolean payload, or `default` when not set.
    #[must_use]
    pub const fn value_or(self, default: bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::NotSet => default,
        }
    }

    #[must_use]
    pub const fn is_not_set(self) -> bool {
        matches!(self, Self::NotSet)
    }

    #[must_use]
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::NotSet => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Self::resolve(Some(value))
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        Self::resolve(value)
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_option()
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::NotSet => write!(f, "not-set"),
        }
    }
}
