//! Child-process plumbing shared by the fetch sources and the executor.
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::{ExecError, ExecResult};

/// Run a command and capture its stdout.
///
/// stderr is captured separately and surfaces in the error on a non-zero
/// exit. With a deadline set, a child that overruns it is killed and the
/// call reports [`ExecError::DeadlineExceeded`].
pub async fn run_capture(
    program: &str,
    args: &[&str],
    deadline: Option<Duration>,
) -> ExecResult<Vec<u8>> {
    let rendered = render_command(program, args);
    trace!(command = %rendered, "spawning");

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);

    let output = match deadline {
        Some(limit) => tokio::time::timeout(limit, cmd.output()).await.map_err(|_| {
            ExecError::DeadlineExceeded {
                command: rendered.clone(),
                limit,
            }
        })?,
        None => cmd.output().await,
    }
    .map_err(|e| ExecError::Spawn {
        command: rendered.clone(),
        reason: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return match output.status.code() {
            Some(code) => Err(ExecError::NonZeroExit {
                command: rendered,
                code,
                stderr,
            }),
            None => Err(ExecError::KilledBySignal { command: rendered }),
        };
    }

    debug!(command = %rendered, bytes = output.stdout.len(), "output captured");
    Ok(output.stdout)
}

/// Render a program and its arguments as one line for logs and errors.
pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
