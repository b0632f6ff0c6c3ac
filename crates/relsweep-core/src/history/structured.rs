use serde::Deserialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::history::{DeployDates, parse_updated};

/// Wire shape of the structured history document (`helm list --output json`).
/// The release manager capitalizes field names in this encoding; a `null` or
/// missing `Releases` key decodes as an empty list.
#[derive(Debug, Deserialize)]
struct ReleaseList {
    #[serde(rename = "Releases")]
    releases: Option<Vec<ReleaseRecord>>,
}

#[derive(Debug, Deserialize)]
struct ReleaseRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Updated")]
    updated: String,
}

/// Decode the JSON release list into deploy dates.
///
/// A document that does not decode into the expected shape is
/// [`CoreError::MalformedHistory`]. Records whose `Updated` cell does not
/// match the expected timestamp layout are dropped from the mapping.
pub(crate) fn parse(raw: &[u8]) -> CoreResult<DeployDates> {
    let doc: ReleaseList =
        serde_json::from_slice(raw).map_err(|e| CoreError::MalformedHistory(e.to_string()))?;

    let mut dates = DeployDates::new();
    for record in doc.releases.unwrap_or_default() {
        match parse_updated(&record.updated) {
            Some(at) => {
                dates.insert(record.name, at);
            }
            None => debug!(
                release = %record.name,
                updated = %record.updated,
                "dropping history record with unparsable timestamp"
            ),
        }
    }
    Ok(dates)
}
