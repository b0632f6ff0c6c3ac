//! Byte sources for the two pipeline fetches.
//!
//! Each source spawns one external process and captures its stdout; the
//! pipeline downstream only ever sees raw bytes. The trait seam is
//! object-safe so tests can substitute canned documents for real processes.
mod helm;
mod kubectl;

pub use helm::HelmSource;
pub use kubectl::KubectlSource;

use async_trait::async_trait;

use crate::error::ExecResult;

/// A source of raw document bytes.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the raw document.
    async fn fetch(&self) -> ExecResult<Vec<u8>>;
}
