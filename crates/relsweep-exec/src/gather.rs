//! Concurrent fetch join.
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{ExecError, ExecResult};
use crate::source::Fetch;

/// Run the inventory and history fetches as two independent tasks and wait
/// for both.
///
/// Each task owns its source and returns its own result; there is no shared
/// mutable state between them. A failure in either fetch aborts the run
/// before any merge is attempted, and a panicked task surfaces as
/// [`ExecError::TaskJoin`].
pub async fn fetch_pair<A, B>(inventory: A, history: B) -> ExecResult<(Vec<u8>, Vec<u8>)>
where
    A: Fetch + 'static,
    B: Fetch + 'static,
{
    let inventory_task = spawn_fetch(inventory);
    let history_task = spawn_fetch(history);

    let (inventory_raw, history_raw) = tokio::try_join!(inventory_task, history_task)
        .map_err(|e| ExecError::TaskJoin(e.to_string()))?;
    Ok((inventory_raw?, history_raw?))
}

fn spawn_fetch<F: Fetch + 'static>(source: F) -> JoinHandle<ExecResult<Vec<u8>>> {
    tokio::spawn(async move {
        let bytes = source.fetch().await?;
        debug!(source = source.name(), bytes = bytes.len(), "fetch complete");
        Ok(bytes)
    })
}
