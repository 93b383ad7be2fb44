//! Server list preview
//!
//! Loads a TOML configuration (and optionally a player cache exported as
//! JSON), simulates one ping and prints what the server would answer.
//!
//! Usage:
//!   serverlist-preview --config serverlist.toml --address 203.0.113.5 --online 12 --max 100

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serverlist_core::{CoreConfig, PingRequest, PlayerCache, ServerListOutcome, ServerListPipeline};
use serverlist_placeholder::{PlaceholderRegistry, register_builtin};
use serverlist_types::ServerContext;
use std::{fs, path::PathBuf, sync::Arc};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "serverlist-preview")]
#[command(about = "Preview the server list response for a simulated ping")]
struct Args {
    /// Path to the TOML configuration
    #[arg(short, long)]
    config: PathBuf,

    /// Path to a player cache exported as JSON
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Address the simulated ping comes from
    #[arg(short, long, default_value = "127.0.0.1")]
    address: String,

    /// Protocol version of the simulated client
    #[arg(short, long, default_value = "765")]
    protocol: i32,

    /// Players currently online
    #[arg(long, default_value = "0")]
    online: i32,

    /// Maximum player count
    #[arg(long, default_value = "20")]
    max: i32,

    /// Host the client connected through
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Preview<'a> {
    #[serde(flatten)]
    outcome: &'a ServerListOutcome,
    players_online: i32,
    players_max: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let contents = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config {:?}", args.config))?;
    let config = CoreConfig::from_toml_str(&contents).context("failed to parse config")?;

    let cache = match &args.cache {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read player cache {path:?}"))?;
            PlayerCache::from_json(&json).context("failed to parse player cache")?
        }
        None => PlayerCache::new(),
    };
    info!(players = cache.len(), "Player cache loaded");

    let registry = Arc::new(PlaceholderRegistry::new());
    register_builtin(&registry).context("failed to register built-in placeholders")?;

    let pipeline = ServerListPipeline::new(&config, registry, Arc::new(cache))?;

    let mut server = ServerContext::new(args.online, args.max);
    if let Some(host) = args.host {
        server = server.with_host(host);
    }
    let request = PingRequest {
        address: args.address,
        protocol: args.protocol,
        server,
    };

    let outcome = pipeline.handle(&request);
    let players_max = outcome
        .entry()
        .map_or(args.max, |entry| entry.max_players(args.online, args.max));
    let preview = Preview {
        outcome: &outcome,
        players_online: args.online,
        players_max,
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
