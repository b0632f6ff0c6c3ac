//! Age threshold filtering.
use std::collections::BTreeSet;

use time::{Duration, OffsetDateTime};

use relsweep_model::ReleaseName;

use crate::history::DeployDates;

/// Releases whose last deploy lies strictly more than `min_age_days` days
/// before `now`.
///
/// The comparison is strict: a release deployed exactly `min_age_days` days
/// ago is not yet old. `now` is supplied by the caller (sampled once per
/// run), never read from the system clock here, so the filter is a pure
/// function of its inputs. Releases absent from `dates` have no recorded
/// deploy and are absent from the result.
pub fn older_than(
    dates: &DeployDates,
    min_age_days: u32,
    now: OffsetDateTime,
) -> BTreeSet<ReleaseName> {
    let threshold = Duration::days(i64::from(min_age_days));
    dates
        .iter()
        .filter(|(_, deployed_at)| now > **deployed_at + threshold)
        .map(|(name, _)| name.clone())
        .collect()
}
