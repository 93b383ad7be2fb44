use serverlist_types::{PlayerContext, ProfileEntry, ServerContext};

/// Fired after placeholders are resolved and before the entry is committed
/// to the response.
///
/// Listeners may swap the entry for a modified copy or cancel the event,
/// in which case the server's unmodified response is sent.
#[derive(Debug)]
pub struct PreServerListSetEvent<'a> {
    entry: ProfileEntry,
    cancelled: bool,
    player: &'a PlayerContext,
    server: &'a ServerContext,
}

impl<'a> PreServerListSetEvent<'a> {
    pub fn new(entry: ProfileEntry, player: &'a PlayerContext, server: &'a ServerContext) -> Self {
        Self {
            entry,
            cancelled: false,
            player,
            server,
        }
    }

    pub fn entry(&self) -> &ProfileEntry {
        &self.entry
    }

    /// Replaces the entry with an independent copy of `entry`.
    pub fn set_entry(&mut self, entry: &ProfileEntry) {
        self.entry = entry.copy();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }

    pub fn player(&self) -> &PlayerContext {
        self.player
    }

    pub fn server(&self) -> &ServerContext {
        self.server
    }

    pub fn into_entry(self) -> ProfileEntry {
        self.entry
    }
}

/// Observer of [`PreServerListSetEvent`]s. Closures taking the event
/// implement this trait.
pub trait ServerListListener: Send + Sync {
    fn on_pre_server_list_set(&self, event: &mut PreServerListSetEvent<'_>);
}

impl<F> ServerListListener for F
where
    F: Fn(&mut PreServerListSetEvent<'_>) + Send + Sync,
{
    fn on_pre_server_list_set(&self, event: &mut PreServerListSetEvent<'_>) {
        self(event)
    }
}
