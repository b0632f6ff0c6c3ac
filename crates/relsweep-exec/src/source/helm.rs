use std::time::Duration;

use async_trait::async_trait;

use relsweep_model::HistoryFormat;

use crate::capture::run_capture;
use crate::error::ExecResult;
use crate::source::Fetch;

/// History source: `helm list` in the encoding the caller selected.
///
/// The decoder downstream is told the same [`HistoryFormat`], so the fetched
/// bytes and the decode strategy cannot drift apart within one run.
#[derive(Debug, Clone, Copy)]
pub struct HelmSource {
    format: HistoryFormat,
    deadline: Option<Duration>,
}

impl HelmSource {
    pub fn new(format: HistoryFormat, deadline: Option<Duration>) -> Self {
        Self { format, deadline }
    }

    fn args(&self) -> &'static [&'static str] {
        match self.format {
            HistoryFormat::Structured => &["list", "-r", "--output", "json"],
            HistoryFormat::Table => &["list", "--all"],
        }
    }
}

#[async_trait]
impl Fetch for HelmSource {
    fn name(&self) -> &'static str {
        "helm"
    }

    async fn fetch(&self) -> ExecResult<Vec<u8>> {
        run_capture("helm", self.args(), self.deadline).await
    }
}
