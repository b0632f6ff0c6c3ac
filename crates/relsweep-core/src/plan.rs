//! Deletion-plan assembly.
//!
//! The last pipeline stage: intersect the "old" and "eligible" sets and
//! correlate each surviving release with its label value and deploy
//! timestamp for the executor and the report.
use std::collections::BTreeSet;

use time::OffsetDateTime;
use tracing::debug;

use relsweep_model::{HistoryFormat, ReleaseName, RetentionPolicy};

use crate::{age, eligible, error::CoreResult, history, inventory};

/// One release scheduled for deletion, carrying the columns the report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub name: ReleaseName,
    pub label_value: String,
    pub deployed_at: OffsetDateTime,
}

/// The pipeline's sole output artifact: releases to delete, ordered by name.
///
/// Computed once per run and handed to the executor; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    entries: Vec<PlanEntry>,
}

impl DeletionPlan {
    /// Build a plan from entries in any order.
    ///
    /// Report order is an explicit sort by release name here, never the
    /// iteration order of some intermediate map.
    pub fn from_entries(mut entries: Vec<PlanEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Returns `true` if there is nothing to delete.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of releases scheduled for deletion.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in report order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Release names in plan order.
    pub fn names(&self) -> Vec<ReleaseName> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

/// Exact membership intersection of two name sets.
///
/// Commutative and deterministic; operand sizes are in the low hundreds, so
/// the tree walk is more than fast enough.
pub fn intersect(a: &BTreeSet<ReleaseName>, b: &BTreeSet<ReleaseName>) -> BTreeSet<ReleaseName> {
    a.intersection(b).cloned().collect()
}

/// Run the whole synchronous pipeline over the two fetched documents.
///
/// Decodes both documents, applies the eligibility policy to the inventory
/// and the age threshold to the history, intersects the two sets, and
/// correlates each surviving release with its label value and deploy
/// timestamp. A malformed document aborts here with no partial plan.
pub fn build_plan(
    inventory_raw: &[u8],
    history_raw: &[u8],
    format: HistoryFormat,
    policy: &RetentionPolicy,
    now: OffsetDateTime,
) -> CoreResult<DeletionPlan> {
    policy.validate()?;

    let records = inventory::parse_inventory(inventory_raw)?;
    let dates = history::parse_history(history_raw, format)?;

    let eligible = eligible::eligible_releases(&records, policy);
    let old = age::older_than(&dates, policy.min_age_days, now);

    let candidates: BTreeSet<ReleaseName> = eligible.keys().cloned().collect();
    let selected = intersect(&old, &candidates);

    debug!(
        resources = records.len(),
        dated = dates.len(),
        eligible = eligible.len(),
        old = old.len(),
        selected = selected.len(),
        "deletion plan computed"
    );

    let entries = selected
        .into_iter()
        .filter_map(|name| {
            let label_value = eligible.get(&name)?.clone();
            let deployed_at = dates.get(&name).copied()?;
            Some(PlanEntry {
                name,
                label_value,
                deployed_at,
            })
        })
        .collect();

    Ok(DeletionPlan::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use relsweep_model::ModelError;

    use crate::error::CoreError;

    use super::*;

    const NOW: OffsetDateTime = datetime!(2019-10-27 12:00:00 UTC);

    // Both releases deployed 10 days before NOW.
    const INVENTORY: &str = r#"{
        "items": [
            {"metadata": {"labels": {"release": "m3db", "branch": "feature-x"}}},
            {"metadata": {"labels": {"release": "uk-booking", "branch": "master"}}}
        ]
    }"#;

    const HISTORY_JSON: &str = r#"{
        "Releases": [
            {"Name": "m3db", "Updated": "Thu Oct 17 12:00:00 2019"},
            {"Name": "uk-booking", "Updated": "Thu Oct 17 12:00:00 2019"}
        ]
    }"#;

    fn names(set: &[&str]) -> BTreeSet<ReleaseName> {
        set.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn intersect_keeps_exactly_the_common_names() {
        let a = names(&["m3db", "uk-booking", "api"]);
        let b = names(&["uk-booking", "api", "web"]);

        let both = intersect(&a, &b);
        assert_eq!(both, names(&["api", "uk-booking"]));
    }

    #[test]
    fn intersect_is_commutative() {
        let a = names(&["m3db", "api"]);
        let b = names(&["api", "web"]);

        assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn intersect_with_empty_set_is_empty() {
        let a = names(&["m3db"]);

        assert!(intersect(&a, &BTreeSet::new()).is_empty());
        assert!(intersect(&BTreeSet::new(), &a).is_empty());
    }

    #[test]
    fn plan_entries_are_sorted_by_name() {
        let plan = DeletionPlan::from_entries(vec![
            PlanEntry {
                name: "zeta".into(),
                label_value: "b".into(),
                deployed_at: NOW,
            },
            PlanEntry {
                name: "alpha".into(),
                label_value: "a".into(),
                deployed_at: NOW,
            },
        ]);

        assert_eq!(plan.names(), vec!["alpha".to_string(), "zeta".to_string()]);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
    }

    #[test]
    fn old_feature_branch_release_is_selected() {
        let policy = RetentionPolicy::new("branch", 3).with_ignore_values(["master"]);

        let plan = build_plan(
            INVENTORY.as_bytes(),
            HISTORY_JSON.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap();

        assert_eq!(plan.names(), vec!["m3db".to_string()]);
        let entry = &plan.entries()[0];
        assert_eq!(entry.label_value, "feature-x");
        assert_eq!(entry.deployed_at, datetime!(2019-10-17 12:00:00 UTC));
    }

    #[test]
    fn excluded_name_empties_the_plan() {
        let policy = RetentionPolicy::new("branch", 3)
            .with_ignore_values(["master"])
            .with_exclude_names(["m3db"]);

        let plan = build_plan(
            INVENTORY.as_bytes(),
            HISTORY_JSON.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap();

        assert!(plan.is_empty());
    }

    #[test]
    fn release_too_young_is_not_selected() {
        let policy = RetentionPolicy::new("branch", 30).with_ignore_values(["master"]);

        let plan = build_plan(
            INVENTORY.as_bytes(),
            HISTORY_JSON.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap();

        assert!(plan.is_empty());
    }

    #[test]
    fn release_missing_from_history_is_never_selected() {
        let history = r#"{"Releases": [{"Name": "uk-booking", "Updated": "Thu Oct 17 12:00:00 2019"}]}"#;
        let policy = RetentionPolicy::new("branch", 3).with_ignore_values(["master"]);

        let plan = build_plan(
            INVENTORY.as_bytes(),
            history.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap();

        assert!(
            plan.is_empty(),
            "m3db has no recorded deploy and must not be treated as old"
        );
    }

    #[test]
    fn bad_table_row_is_dropped_without_aborting() {
        let history = "\
NAME\tREVISION\tUPDATED\tSTATUS\tCHART\tNAMESPACE
BAD-NAME\t1\tnot-a-date\tDEPLOYED\tchart\tns
m3db\t3\tThu Oct 17 12:00:00 2019\tDEPLOYED\tm3db-0.1.0\tdata
";
        let policy = RetentionPolicy::new("branch", 3).with_ignore_values(["master"]);

        let plan = build_plan(
            INVENTORY.as_bytes(),
            history.as_bytes(),
            HistoryFormat::Table,
            &policy,
            NOW,
        )
        .unwrap();

        assert_eq!(plan.names(), vec!["m3db".to_string()]);
    }

    #[test]
    fn malformed_inventory_aborts_with_no_partial_plan() {
        let policy = RetentionPolicy::new("branch", 3);

        let err = build_plan(
            b"not json",
            HISTORY_JSON.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::MalformedInventory(_)));
    }

    #[test]
    fn malformed_history_aborts_with_no_partial_plan() {
        let policy = RetentionPolicy::new("branch", 3);

        let err = build_plan(
            INVENTORY.as_bytes(),
            b"not json",
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::MalformedHistory(_)));
    }

    #[test]
    fn invalid_policy_is_rejected_before_parsing() {
        let policy = RetentionPolicy::new("  ", 3);

        let err = build_plan(
            INVENTORY.as_bytes(),
            HISTORY_JSON.as_bytes(),
            HistoryFormat::Structured,
            &policy,
            NOW,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::Model(ModelError::InvalidPolicy(_))));
    }
}
