//! Fatal preconditions checked before anything is spawned.
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::debug;

/// Verify cluster credentials exist before the pipeline starts.
///
/// `$KUBECONFIG` wins when set and non-empty; otherwise
/// `$HOME/.kube/config`. The file must be openable: a run with no
/// credentials dies here with a clear diagnostic, not halfway through a
/// kubectl spawn.
pub fn check_kubeconfig() -> anyhow::Result<PathBuf> {
    let path = kubeconfig_candidate(env::var_os("KUBECONFIG"), env::var_os("HOME"))
        .context("neither $KUBECONFIG nor $HOME is set")?;
    ensure_readable(&path)?;
    debug!(path = %path.display(), "kubeconfig found");
    Ok(path)
}

fn kubeconfig_candidate(kubeconfig: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    match kubeconfig {
        Some(explicit) if !explicit.is_empty() => Some(PathBuf::from(explicit)),
        _ => home.map(|h| Path::new(&h).join(".kube").join("config")),
    }
}

fn ensure_readable(path: &Path) -> anyhow::Result<()> {
    fs::File::open(path)
        .map(drop)
        .with_context(|| format!("opening kubeconfig {}", path.display()))
}
