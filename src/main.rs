//! kvseed CLI - seed node and cluster metadata into a Consul KV store
//!
//! Usage: kvseed [COMMAND]
//!
//! Commands:
//!   publish  Publish the node descriptor, version map and deploy config (default)
//!   verify   Read the published records back and check them
//!   clear    Delete the node and cluster subtrees

mod commands;
mod presentation;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use presentation::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command() {
        Commands::Publish { dry_run } => commands::publish::cmd_publish(&cli, dry_run),
        Commands::Verify => commands::verify::cmd_verify(&cli),
        Commands::Clear { dry_run } => commands::clear::cmd_clear(&cli, dry_run),
    };

    if let Err(err) = result {
        presentation::output::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `KVSEED_LOG` takes EnvFilter directives and
/// overrides the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("KVSEED_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("kvseed={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
