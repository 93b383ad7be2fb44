//! Per-request resolution of the server list entry.

use crate::cache::PlayerCache;
use crate::config::{CoreConfig, UnknownPlayerConfig};
use crate::error::CoreResult;
use crate::event::{PreServerListSetEvent, ServerListListener};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serverlist_placeholder::{PlaceholderRegistry, dispatch_entry};
use serverlist_profile::{ProfileSet, ServerListProfile};
use serverlist_types::{PlayerContext, ProfileEntry, ServerContext};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Decides whether a profile applies to a request.
pub type ProfileFilter =
    Arc<dyn Fn(&ServerListProfile, &PlayerContext, &ServerContext) -> bool + Send + Sync>;

/// An inbound list request as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingRequest {
    /// Client address without port.
    pub address: String,
    pub protocol: i32,
    pub server: ServerContext,
}

/// What the network layer should send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "entry", rename_all = "snake_case")]
pub enum ServerListOutcome {
    /// Send the server's unmodified response.
    Default,
    /// Apply this entry to the response.
    Customized(ProfileEntry),
}

impl ServerListOutcome {
    pub fn entry(&self) -> Option<&ProfileEntry> {
        match self {
            Self::Default => None,
            Self::Customized(entry) => Some(entry),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

pub struct ServerListPipeline {
    profiles: ProfileSet,
    unknown_player: UnknownPlayerConfig,
    registry: Arc<PlaceholderRegistry>,
    cache: Arc<PlayerCache>,
    listeners: Vec<Arc<dyn ServerListListener>>,
    filter: Option<ProfileFilter>,
}

impl ServerListPipeline {
    pub fn new(
        config: &CoreConfig,
        registry: Arc<PlaceholderRegistry>,
        cache: Arc<PlayerCache>,
    ) -> CoreResult<Self> {
        let profiles = config.profile_set()?;
        info!(
            profiles = profiles.profiles().len(),
            placeholders = registry.len(),
            "Server list pipeline ready"
        );
        Ok(Self {
            profiles,
            unknown_player: config.unknown_player.clone(),
            registry,
            cache,
            listeners: Vec::new(),
            filter: None,
        })
    }

    /// Restricts profile selection to profiles accepted by `filter`.
    pub fn with_filter(mut self, filter: ProfileFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Adds a listener. Listeners run in the order they were added.
    pub fn add_listener(&mut self, listener: Arc<dyn ServerListListener>) {
        self.listeners.push(listener);
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    pub fn registry(&self) -> &Arc<PlaceholderRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<PlayerCache> {
        &self.cache
    }

    /// The player a request is attributed to.
    pub fn player_for(&self, request: &PingRequest) -> PlayerContext {
        match self.cache.find_by_address(&request.address) {
            Some(cached) => cached.to_context(request.protocol),
            None => self.unknown_player.to_context(request.protocol),
        }
    }

    /// Resolves the entry for one request.
    ///
    /// A panic inside a placeholder handler or listener abandons the
    /// customization of this request only; the default response is used.
    pub fn handle(&self, request: &PingRequest) -> ServerListOutcome {
        let player = self.player_for(request);
        let server = &request.server;

        match panic::catch_unwind(AssertUnwindSafe(|| self.customize(&player, server))) {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    address = %request.address,
                    player = %player.name,
                    "Server list customization panicked, sending default response"
                );
                ServerListOutcome::Default
            }
        }
    }

    fn customize(&self, player: &PlayerContext, server: &ServerContext) -> ServerListOutcome {
        let profile = self.profiles.select(|p| {
            self.filter
                .as_ref()
                .is_none_or(|filter| filter(p, player, server))
        });
        let variant = profile
            .filter(|p| !p.variants.is_empty())
            .map(|p| rand::thread_rng().gen_range(0..p.variants.len()));

        let merged = self.profiles.resolve(profile, variant);
        let entry = dispatch_entry(&self.registry, &merged, player, server);
        if entry.is_invalid() {
            debug!(player = %player.name, "Resolved entry is empty, sending default response");
            return ServerListOutcome::Default;
        }

        let mut event = PreServerListSetEvent::new(entry, player, server);
        for listener in &self.listeners {
            listener.on_pre_server_list_set(&mut event);
        }

        if event.is_cancelled() {
            debug!(player = %player.name, "Server list event cancelled");
            return ServerListOutcome::Default;
        }
        if event.entry().is_invalid() {
            warn!(player = %player.name, "Listener set an empty entry, sending default response");
            return ServerListOutcome::Default;
        }
        ServerListOutcome::Customized(event.into_entry())
    }
}
