use anyhow::Result;
use kvseed::PublishOptions;

use super::{ensure_success, load_config};
use crate::presentation::cli::Cli;
use crate::presentation::factory::create_publish_use_case;

pub fn cmd_publish(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;
    let use_case = create_publish_use_case(&config, cli.json)?;

    let options = PublishOptions::default().with_dry_run(dry_run);
    let report = use_case.execute(&config, &options)?;

    ensure_success("publish", &report)
}
