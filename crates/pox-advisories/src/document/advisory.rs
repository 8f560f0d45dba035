use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw advisory record as published in an advisories database.
///
/// The same shape is read from YAML and JSON documents.
///
/// Only the keys needed to compute conflicts are decoded, everything else
/// (title, link, cve, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryData {
    /// Package reference, usually `composer://vendor/package`
    pub reference: String,

    /// Affected branches, in the order they appear in the document
    pub branches: IndexMap<String, BranchData>,
}

/// Affected versions of a single branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchData {
    /// Boundaries of the affected range, such as `[">=1.0", "<1.1"]`
    #[serde(deserialize_with = "one_or_many")]
    pub versions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(version) => vec![version],
        OneOrMany::Many(versions) => versions,
    })
}
