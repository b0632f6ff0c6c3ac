use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// Stamps every log line with RFC3339 UTC.
///
/// Deploy timestamps and age decisions are UTC; log lines stay in the same
/// clock so the two can be read against each other.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UtcTimer;

impl FormatTime for UtcTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts}"),
            Err(_) => write!(w, "<invalid-time>"),
        }
    }
}
