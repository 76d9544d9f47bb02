use anyhow::Result;

use super::{ensure_success, load_config};
use crate::presentation::cli::Cli;
use crate::presentation::factory::create_verify_use_case;

pub fn cmd_verify(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let report = create_verify_use_case(&config, cli.json)?.execute(&config)?;

    ensure_success("verify", &report)
}
