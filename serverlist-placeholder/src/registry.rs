//! Identifier → handler bindings shared by every request.
//!
//! The registry is append-only: identifiers are registered while extensions
//! load and stay bound for the lifetime of the registry. Registration takes
//! the write lock only for the duplicate check and the insert, so lookups
//! from request threads never wait longer than one insert.

use crate::error::{PlaceholderError, PlaceholderResult};
use crate::handler::PlaceholderHandler;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// Trims and lower-cases an identifier.
///
/// Lower-casing uses the Unicode default mapping, which does not depend on
/// the process locale.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

#[derive(Default)]
pub struct PlaceholderRegistry {
    handlers: RwLock<HashMap<String, Arc<dyn PlaceholderHandler>>>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `identifier` to `handler` and returns the normalized identifier.
    ///
    /// Fails with [`PlaceholderError::InvalidProvider`] when the identifier is
    /// blank, contains whitespace after trimming, or is already registered in
    /// any letter case. A failed registration leaves existing bindings intact.
    pub fn register(
        &self,
        identifier: &str,
        handler: Arc<dyn PlaceholderHandler>,
    ) -> PlaceholderResult<String> {
        let normalized = match validate_identifier(identifier) {
            Ok(normalized) => normalized,
            Err(err) => {
                warn!(identifier = %identifier, error = %err, "Rejected placeholder provider");
                return Err(err);
            }
        };

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        match handlers.entry(normalized) {
            Entry::Occupied(entry) => {
                let err = PlaceholderError::InvalidProvider(format!(
                    "placeholder provider with identifier '{}' already exists",
                    entry.key()
                ));
                warn!(identifier = %entry.key(), "Rejected duplicate placeholder provider");
                Err(err)
            }
            Entry::Vacant(entry) => {
                let normalized = entry.key().clone();
                entry.insert(handler);
                info!(identifier = %normalized, "Registered placeholder provider");
                Ok(normalized)
            }
        }
    }

    /// Returns the handler bound to `identifier`, ignoring letter case and
    /// surrounding whitespace.
    pub fn lookup(&self, identifier: &str) -> Option<Arc<dyn PlaceholderHandler>> {
        let key = normalize_identifier(identifier);
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_some()
    }

    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}

impl fmt::Debug for PlaceholderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

fn validate_identifier(identifier: &str) -> PlaceholderResult<String> {
    if identifier.trim().is_empty() {
        return Err(PlaceholderError::InvalidProvider(
            "placeholder provider identifier may not be empty".into(),
        ));
    }
    let normalized = normalize_identifier(identifier);
    if normalized.chars().any(char::is_whitespace) {
        return Err(PlaceholderError::InvalidProvider(format!(
            "identifier '{normalized}' may not contain spaces"
        )));
    }
    Ok(normalized)
}
