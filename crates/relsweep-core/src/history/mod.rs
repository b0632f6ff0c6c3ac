//! Release-history decoding.
//!
//! The release manager has shipped the same data in two incompatible
//! encodings over its lifetime. Both are supported, each behind its own
//! decode path, and the caller states which one it fetched via
//! [`HistoryFormat`]. The encoding is never guessed from the payload.
mod structured;
mod table;

use std::collections::BTreeMap;

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

use relsweep_model::{HistoryFormat, ReleaseName};

use crate::error::CoreResult;

/// Last-deploy instants keyed by release name.
///
/// A release absent from this map has no recorded deploy and must never be
/// treated as old.
pub type DeployDates = BTreeMap<ReleaseName, OffsetDateTime>;

/// Timestamp layout used by the release manager in both encodings,
/// e.g. `Tue Oct 22 22:45:51 2019`.
const UPDATED_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day padding:none] [hour]:[minute]:[second] [year]"
);

/// Decode the history document in the given encoding.
///
/// Records whose timestamp does not match the expected layout are dropped
/// from the mapping, never defaulted: an epoch fallback would make a broken
/// row look infinitely old and hence a deletion candidate.
pub fn parse_history(raw: &[u8], format: HistoryFormat) -> CoreResult<DeployDates> {
    match format {
        HistoryFormat::Structured => structured::parse(raw),
        HistoryFormat::Table => table::parse(raw),
    }
}

/// Parse one timestamp cell; `None` when the text does not match the layout.
///
/// The text carries no UTC offset, so the parsed value is assumed UTC.
pub(crate) fn parse_updated(text: &str) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(text, UPDATED_FORMAT)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
