mod labels;
pub use labels::Labels;

mod constants;
pub use constants::LABEL_RELEASE;

/// Unique name of a deployed release.
///
/// Names are compared exactly as produced by the release manager;
/// no trimming, case folding or other normalization is applied.
pub type ReleaseName = String;
