//! Records of players seen joining, keyed by unique id.
//!
//! Pings carry no player identity, only the client address, so the cache
//! also indexes the most recent address of every player. The durable copy
//! is owned by the host; [`PlayerCache::to_json`] and
//! [`PlayerCache::from_json`] convert to and from its storage format.

use crate::error::CoreResult;
use serverlist_types::CachedPlayer;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct CacheInner {
    by_uuid: HashMap<Uuid, CachedPlayer>,
    by_address: HashMap<String, Uuid>,
}

#[derive(Debug, Default)]
pub struct PlayerCache {
    inner: RwLock<CacheInner>,
}

impl PlayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates the record for `uuid`. Returns `true` when the
    /// player was not cached before.
    ///
    /// The address index always points at the player recorded last.
    pub fn record(&self, address: &str, name: &str, uuid: Uuid) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let previous = inner
            .by_uuid
            .insert(uuid, CachedPlayer::new(address, name, uuid));
        if let Some(prev) = &previous {
            if prev.address != address && inner.by_address.get(&prev.address) == Some(&uuid) {
                inner.by_address.remove(&prev.address);
            }
        }
        inner.by_address.insert(address.to_string(), uuid);

        let is_new = previous.is_none();
        debug!(player = %name, %uuid, is_new, "Recorded player");
        is_new
    }

    pub fn get(&self, uuid: &Uuid) -> Option<CachedPlayer> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_uuid
            .get(uuid)
            .cloned()
    }

    pub fn find_by_address(&self, address: &str) -> Option<CachedPlayer> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .by_address
            .get(address)
            .and_then(|uuid| inner.by_uuid.get(uuid))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_uuid
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, ordered by unique id.
    pub fn snapshot(&self) -> Vec<CachedPlayer> {
        let mut players: Vec<CachedPlayer> = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_uuid
            .values()
            .cloned()
            .collect();
        players.sort_by_key(|p| p.uuid);
        players
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Restores a cache from a JSON array of records.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let players: Vec<CachedPlayer> = serde_json::from_str(json)?;
        let cache = Self::new();
        for player in &players {
            cache.record(&player.address, &player.name, player.uuid);
        }
        Ok(cache)
    }
}
