use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    domain::ReleaseName,
    error::{ModelError, ModelResult},
};

/// Retention policy applied by the eligibility matcher.
///
/// A policy is assembled once per run (from CLI flags and the optional
/// exclude file) and is immutable afterwards.
///
/// Fields cover:
/// - which label key a release must carry to be considered (`label_key`)
/// - label values that protect a release from deletion (`ignore_values`)
/// - release names that are never deleted (`exclude_names`)
/// - the minimum age before deletion is allowed (`min_age_days`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPolicy {
    /// Label key that selects a release for consideration, typically a
    /// source-branch indicator.
    pub label_key: String,
    /// Values of `label_key` that mark a release as protected
    /// (e.g. long-lived branch names).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ignore_values: BTreeSet<String>,
    /// Release names that are never deleted, regardless of labels or age.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exclude_names: BTreeSet<ReleaseName>,
    /// Minimum age in days; releases deployed more recently are kept.
    pub min_age_days: u32,
}

impl RetentionPolicy {
    /// Create a policy with the given label key and age threshold and no
    /// ignored values or excluded names.
    pub fn new(label_key: impl Into<String>, min_age_days: u32) -> Self {
        Self {
            label_key: label_key.into(),
            ignore_values: BTreeSet::new(),
            exclude_names: BTreeSet::new(),
            min_age_days,
        }
    }

    /// Replace the set of protected label values.
    ///
    /// This is a builder-style helper:
    ///
    /// ```rust
    /// use relsweep_model::RetentionPolicy;
    ///
    /// let policy = RetentionPolicy::new("branch", 3)
    ///     .with_ignore_values(["master", "develop"]);
    /// assert!(policy.ignores_value("master"));
    /// ```
    pub fn with_ignore_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the set of excluded release names.
    pub fn with_exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ReleaseName>,
    {
        self.exclude_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the given label value is protected.
    pub fn ignores_value(&self, value: &str) -> bool {
        self.ignore_values.contains(value)
    }

    /// Returns `true` if the given release name is excluded by name.
    pub fn excludes_name(&self, name: &str) -> bool {
        self.exclude_names.contains(name)
    }

    /// Validate the policy before the pipeline starts.
    ///
    /// Rules:
    /// - `label_key` is not empty or whitespace-only.
    pub fn validate(&self) -> ModelResult<()> {
        if self.label_key.trim().is_empty() {
            return Err(ModelError::InvalidPolicy("label key is empty".into()));
        }
        Ok(())
    }
}
