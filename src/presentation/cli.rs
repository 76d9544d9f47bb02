//! CLI Argument Parsing
//!
//! Global flags (--config, --store-host, --json, --verbose, ...) are
//! inherited by all subcommands. Running without a subcommand publishes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kvseed::Config;

/// kvseed - seed node and cluster metadata into a Consul KV store
#[derive(Parser, Debug)]
#[command(name = "kvseed")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'kvseed' without a subcommand to publish.")]
pub struct Cli {
    /// Config file (defaults to ./kvseed.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Key-value store host
    #[arg(long, global = true, value_name = "HOST")]
    pub store_host: Option<String>,

    /// Key-value store port
    #[arg(long, global = true, value_name = "PORT")]
    pub store_port: Option<u16>,

    /// Register under this name instead of the OS hostname
    #[arg(long, global = true)]
    pub hostname: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Publish the node descriptor, version map and deploy config
    Publish {
        /// Print the requests without sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Read the published records back and check them
    Verify,

    /// Delete the node and cluster subtrees
    Clear {
        /// Print the requests without sending them
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// The command to run; publishing is the default
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Publish { dry_run: false })
    }

    /// Apply flag overrides on top of file and environment config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(host) = &self.store_host {
            config.store.host = host.clone();
        }
        if let Some(port) = self.store_port {
            config.store.port = port;
        }
        if let Some(hostname) = &self.hostname {
            config.hostname = Some(hostname.clone());
        }
        if let Some(timeout) = self.timeout {
            config.store.timeout_secs = timeout;
        }
        config
    }
}
