use serverlist_types::{PlayerContext, ServerContext};

/// Resolves the expression part of `${identifier expression}`.
///
/// Returning `None` means the expression cannot be resolved; the original
/// text is then kept verbatim. Handlers are called from many request
/// threads at once and should return quickly.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use serverlist_placeholder::PlaceholderRegistry;
/// use serverlist_types::{PlayerContext, ServerContext};
/// use std::sync::Arc;
///
/// let registry = PlaceholderRegistry::new();
/// let motto = |_: &str, _: &PlayerContext, _: &ServerContext| Some("Have fun".to_string());
/// registry.register("motto", Arc::new(motto)).unwrap();
/// ```
pub trait PlaceholderHandler: Send + Sync {
    fn parse(
        &self,
        expression: &str,
        player: &PlayerContext,
        server: &ServerContext,
    ) -> Option<String>;
}

impl<F> PlaceholderHandler for F
where
    F: Fn(&str, &PlayerContext, &ServerContext) -> Option<String> + Send + Sync,
{
    fn parse(
        &self,
        expression: &str,
        player: &PlayerContext,
        server: &ServerContext,
    ) -> Option<String> {
        self(expression, player, server)
    }
}
