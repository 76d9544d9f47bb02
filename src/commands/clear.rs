use anyhow::Result;
use kvseed::ClearOptions;

use super::{ensure_success, load_config};
use crate::presentation::cli::Cli;
use crate::presentation::factory::create_clear_use_case;

pub fn cmd_clear(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;
    let use_case = create_clear_use_case(&config, cli.json)?;

    let report = use_case.execute(&config, &ClearOptions { dry_run })?;

    ensure_success("clear", &report)
}
