//! Cluster-state decoding.
//!
//! Turns the raw inventory document (`kubectl get deployments -o json`) into
//! a per-release label map. The decode is strict and typed: a document that
//! does not carry the expected shape aborts the run instead of producing a
//! partially-correct deletion set.
use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use relsweep_model::{LABEL_RELEASE, Labels, ReleaseName};

use crate::error::{CoreError, CoreResult};

/// Wire shape of the inventory document: a resource list whose items carry
/// label metadata. Everything else in the document is ignored.
#[derive(Debug, Deserialize)]
struct ResourceList {
    items: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    #[serde(default)]
    metadata: ResourceMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ResourceMetadata {
    #[serde(default)]
    labels: Labels,
}

/// Decode the inventory document into a per-release label map.
///
/// Only items whose label set carries the [`LABEL_RELEASE`] key become
/// entries; the value under that key is the map key. When several items name
/// the same release, the later item in document order wins.
///
/// A resource without metadata or labels is not an error; it has no release
/// key and is skipped. A document without the expected top-level `items`
/// sequence, or with labels that are not a string mapping, is
/// [`CoreError::MalformedInventory`].
pub fn parse_inventory(raw: &[u8]) -> CoreResult<BTreeMap<ReleaseName, Labels>> {
    let doc: ResourceList =
        serde_json::from_slice(raw).map_err(|e| CoreError::MalformedInventory(e.to_string()))?;

    let item_count = doc.items.len();
    let mut releases = BTreeMap::new();
    for item in doc.items {
        let labels = item.metadata.labels;
        let Some(name) = labels.get(LABEL_RELEASE).map(str::to_owned) else {
            continue;
        };
        releases.insert(name, labels);
    }

    debug!(
        items = item_count,
        releases = releases.len(),
        "cluster inventory decoded"
    );
    Ok(releases)
}
