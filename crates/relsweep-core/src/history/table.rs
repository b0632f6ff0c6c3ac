use tracing::debug;

use crate::error::CoreResult;
use crate::history::{DeployDates, parse_updated};

/// Column layout of the tabular listing (`helm list --all`):
/// NAME, REVISION, UPDATED, STATUS, CHART, NAMESPACE.
const COLUMNS: usize = 6;
const COL_NAME: usize = 0;
const COL_UPDATED: usize = 2;

/// Decode the tab-delimited release table into deploy dates.
///
/// Every defect in this encoding is row-local: the header row, blank lines,
/// rows with fewer than [`COLUMNS`] cells, and rows whose timestamp does not
/// match the expected layout are all skipped without aborting the run.
pub(crate) fn parse(raw: &[u8]) -> CoreResult<DeployDates> {
    let text = String::from_utf8_lossy(raw);

    let mut dates = DeployDates::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
        if cells.len() < COLUMNS {
            debug!(cells = cells.len(), "skipping history row with too few columns");
            continue;
        }
        let name = cells[COL_NAME];
        if name == "NAME" {
            continue;
        }
        match parse_updated(cells[COL_UPDATED]) {
            Some(at) => {
                dates.insert(name.to_string(), at);
            }
            None => debug!(
                release = name,
                updated = cells[COL_UPDATED],
                "dropping history row with unparsable timestamp"
            ),
        }
    }
    Ok(dates)
}
