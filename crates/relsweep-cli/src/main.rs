//! relsweep: deletes stale helm releases selected by label policy and age.
mod args;
mod preflight;
mod report;

use clap::Parser;
use time::OffsetDateTime;
use tracing::info;

use relsweep_core::prelude::build_plan;
use relsweep_exec::{DeleteOutcome, HelmDelete, HelmSource, KubectlSource, fetch_pair};
use relsweep_observe::{LoggerConfig, LoggerLevel, init_logger};

use crate::args::Cli;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let cfg = LoggerConfig {
        format: cli.log_format,
        level: LoggerLevel::new(cli.log_level.as_str())?,
        ..Default::default()
    };
    init_logger(&cfg)?;

    // 2) preflight: credentials must exist before anything is spawned
    let kubeconfig = preflight::check_kubeconfig()?;
    info!(kubeconfig = %kubeconfig.display(), "credentials found");

    // 3) policy, validated before any fetch
    let policy = cli.retention_policy()?;
    policy.validate()?;

    // 4) fetch inventory and history concurrently
    let deadline = cli.fetch_deadline();
    let inventory = KubectlSource::new(cli.namespace_opt(), deadline);
    let history = HelmSource::new(cli.history_format, deadline);
    let (inventory_raw, history_raw) = fetch_pair(inventory, history).await?;

    // 5) compute the deletion plan
    let now = OffsetDateTime::now_utc();
    let plan = build_plan(
        &inventory_raw,
        &history_raw,
        cli.history_format,
        &policy,
        now,
    )?;
    if plan.is_empty() {
        info!("no stale releases, nothing to delete");
        return Ok(());
    }
    info!(releases = plan.len(), "stale releases selected");

    if cli.verbose {
        print!("{}", report::render(&plan, &policy.label_key));
    }

    // 6) delete, or show the command that would run
    let outcome = HelmDelete::new(cli.execute, deadline)
        .delete(&plan.names())
        .await?;
    match outcome {
        DeleteOutcome::DryRun(command) => println!("{command}"),
        DeleteOutcome::Executed(stdout) => print!("{}", String::from_utf8_lossy(&stdout)),
        DeleteOutcome::Empty => {}
    }

    Ok(())
}
