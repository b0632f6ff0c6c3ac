//! Helm release deletion.
use std::time::Duration;

use relsweep_model::ReleaseName;
use tracing::{debug, info};

use crate::capture::{render_command, run_capture};
use crate::error::ExecResult;

/// What the deletion step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was selected; no process was spawned.
    Empty,
    /// The command that would have run, rendered verbatim.
    DryRun(String),
    /// The delete ran; raw stdout from helm.
    Executed(Vec<u8>),
}

/// Deletes helm releases in one invocation, or reports what it would run.
#[derive(Debug, Clone, Copy)]
pub struct HelmDelete {
    execute: bool,
    deadline: Option<Duration>,
}

impl HelmDelete {
    pub fn new(execute: bool, deadline: Option<Duration>) -> Self {
        Self { execute, deadline }
    }

    /// Delete the named releases.
    ///
    /// An empty list short-circuits without spawning anything. Without
    /// `execute` the exact command line is returned instead of being run.
    pub async fn delete(&self, names: &[ReleaseName]) -> ExecResult<DeleteOutcome> {
        if names.is_empty() {
            info!("no releases selected, skipping delete");
            return Ok(DeleteOutcome::Empty);
        }

        let args = delete_args(names);
        if !self.execute {
            let rendered = render_command("helm", &args);
            debug!(command = %rendered, "dry-run, not executing");
            return Ok(DeleteOutcome::DryRun(rendered));
        }

        info!(releases = names.len(), "deleting releases");
        let stdout = run_capture("helm", &args, self.deadline).await?;
        Ok(DeleteOutcome::Executed(stdout))
    }
}

/// Each release name is its own argv element; names are never re-tokenized.
fn delete_args(names: &[ReleaseName]) -> Vec<&str> {
    let mut args = vec!["delete", "--purge"];
    args.extend(names.iter().map(String::as_str));
    args
}
