//! Named, prioritized profiles cascading over the global defaults.

use crate::error::{ProfileError, ProfileResult};
use crate::layer::ProfileLayer;
use crate::resolver;
use serde::{Deserialize, Serialize};
use serverlist_types::ProfileEntry;
use std::collections::HashSet;
use tracing::debug;

/// Configuration of one profile as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerListProfileConfig {
    pub name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(flatten)]
    pub entry: ProfileLayer,
    #[serde(default)]
    pub variants: Vec<ProfileLayer>,
}

/// Configuration of the defaults plus every profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfileSetConfig {
    pub defaults: ProfileLayer,
    pub profiles: Vec<ServerListProfileConfig>,
}

/// A profile ready to be layered over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerListProfile {
    pub name: String,
    pub priority: i32,
    pub entry: ProfileEntry,
    /// Alternative overrides; at most one is applied per response.
    pub variants: Vec<ProfileEntry>,
}

impl ServerListProfile {
    pub fn new(name: impl Into<String>, priority: i32, entry: ProfileEntry) -> Self {
        Self {
            name: name.into(),
            priority,
            entry,
            variants: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variants: Vec<ProfileEntry>) -> Self {
        self.variants = variants;
        self
    }

    pub fn variant(&self, index: usize) -> Option<&ProfileEntry> {
        self.variants.get(index)
    }
}

impl From<&ServerListProfileConfig> for ServerListProfile {
    fn from(config: &ServerListProfileConfig) -> Self {
        Self {
            name: config.name.clone(),
            priority: config.priority,
            entry: config.entry.to_entry(),
            variants: config.variants.iter().map(ProfileLayer::to_entry).collect(),
        }
    }
}

/// The global defaults and all configured profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    defaults: ProfileEntry,
    profiles: Vec<ServerListProfile>,
}

impl ProfileSet {
    /// Creates a set, rejecting two profiles with the same name.
    pub fn new(defaults: ProfileEntry, profiles: Vec<ServerListProfile>) -> ProfileResult<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(ProfileError::DuplicateProfile(profile.name.clone()));
            }
        }
        Ok(Self { defaults, profiles })
    }

    pub fn from_config(config: &ProfileSetConfig) -> ProfileResult<Self> {
        Self::new(
            config.defaults.to_entry(),
            config.profiles.iter().map(ServerListProfile::from).collect(),
        )
    }

    pub fn from_toml_str(contents: &str) -> ProfileResult<Self> {
        let config: ProfileSetConfig = toml::from_str(contents)?;
        Self::from_config(&config)
    }

    pub fn defaults(&self) -> &ProfileEntry {
        &self.defaults
    }

    pub fn profiles(&self) -> &[ServerListProfile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&ServerListProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Returns the highest-priority profile accepted by `filter`.
    ///
    /// On equal priority the profile declared first wins.
    pub fn select<F>(&self, mut filter: F) -> Option<&ServerListProfile>
    where
        F: FnMut(&ServerListProfile) -> bool,
    {
        let mut best: Option<&ServerListProfile> = None;
        for profile in self.profiles.iter().filter(|p| filter(p)) {
            if best.is_none_or(|b| profile.priority > b.priority) {
                best = Some(profile);
            }
        }
        if let Some(profile) = best {
            debug!(profile = %profile.name, priority = profile.priority, "Selected profile");
        }
        best
    }

    /// The merge chain for `profile` and the optional variant index.
    pub fn chain<'a>(
        &'a self,
        profile: Option<&'a ServerListProfile>,
        variant: Option<usize>,
    ) -> Vec<&'a ProfileEntry> {
        let mut chain = vec![&self.defaults];
        if let Some(profile) = profile {
            chain.push(&profile.entry);
            if let Some(entry) = variant.and_then(|i| profile.variant(i)) {
                chain.push(entry);
            }
        }
        chain
    }

    /// Resolves the effective entry for `profile` and the optional variant.
    pub fn resolve(&self, profile: Option<&ServerListProfile>, variant: Option<usize>) -> ProfileEntry {
        resolver::resolve(self.chain(profile, variant))
    }
}
