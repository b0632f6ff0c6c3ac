//! Common model-level constants.
//!
//! Well-known label keys used across the pipeline live here so they are not
//! scattered as magic strings through the parsers and the matcher.

/// Label key that ties a live cluster resource back to its owning release.
///
/// Resources without this key do not belong to any tracked release and are
/// invisible to the whole pipeline; the value under this key is the
/// [`crate::ReleaseName`] used everywhere downstream.
pub const LABEL_RELEASE: &str = "release";
