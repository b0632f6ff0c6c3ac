//! Label-policy eligibility matching.
use std::collections::BTreeMap;

use relsweep_model::{LABEL_RELEASE, Labels, ReleaseName, RetentionPolicy};

/// Releases whose labels satisfy the retention policy, mapped to the value
/// of the policy label (kept for the report).
///
/// A release is eligible iff its label set carries both the release key and
/// `policy.label_key`, the policy label's value is not ignored, and the
/// release name is not excluded. Failing any check leaves the release out of
/// the result; that is expected filtering, not an error.
pub fn eligible_releases(
    records: &BTreeMap<ReleaseName, Labels>,
    policy: &RetentionPolicy,
) -> BTreeMap<ReleaseName, String> {
    let mut eligible = BTreeMap::new();
    for (name, labels) in records {
        if !labels.contains_key(LABEL_RELEASE) {
            continue;
        }
        let Some(value) = labels.get(&policy.label_key) else {
            continue;
        };
        if policy.ignores_value(value) || policy.excludes_name(name) {
            continue;
        }
        eligible.insert(name.clone(), value.to_string());
    }
    eligible
}
