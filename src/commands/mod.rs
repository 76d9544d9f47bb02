//! Command handlers
//!
//! Each handler loads config, wires a use case through the factory, runs it
//! and turns a partially failed report into an error for the exit code.

pub mod clear;
pub mod publish;
pub mod verify;

use std::path::Path;

use anyhow::Result;
use kvseed::application::Report;
use kvseed::config::{discover, with_env_overrides};
use kvseed::{Config, KvseedError};

use crate::presentation::cli::Cli;
use crate::presentation::output::{print_warnings, OperationsFailed};

/// Resolve config: file, then KVSEED_* environment, then flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = discover(cli.config.as_deref())?;
    print_warnings(&loaded.warnings, cli.json);

    let config = with_env_overrides(loaded.config, |key| std::env::var(key).ok())?;
    let config = cli.apply_overrides(config);

    let source = loaded
        .source
        .as_deref()
        .unwrap_or_else(|| Path::new("<defaults>"));
    config.validate(source)?;

    Ok(config)
}

/// Exit non-zero when any store operation failed
pub fn ensure_success<T>(command: &'static str, report: &Report<T>) -> Result<()> {
    if report.is_success() {
        return Ok(());
    }

    Err(OperationsFailed {
        command,
        failed: report.failed(),
        total: report.items.len(),
        unreachable: report
            .errors()
            .any(|(_, error)| matches!(error, KvseedError::StoreUnreachable { .. })),
    }
    .into())
}
