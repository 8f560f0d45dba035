use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Package author entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The generated composer.json carrying the conflict rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,

    pub description: String,

    pub license: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    /// Conflict rules keyed by package name
    #[serde(default)]
    pub conflict: IndexMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: "roave/roave-security-advisories".to_string(),
            package_type: None,
            description: "Conflict rules based on sensiolab's security advisories: \
                prevents installation of packages with known security vulnerabilities. \
                Please only use dev-master@DEV from this package. \
                Commits on this package are GPG-signed."
                .to_string(),
            license: "MIT".to_string(),
            authors: vec![Author {
                name: "Marco Pivetta".to_string(),
                role: Some("maintainer".to_string()),
                email: Some("ocramius@gmail.com".to_string()),
            }],
            conflict: IndexMap::new(),
        }
    }
}

impl Manifest {
    /// Replace the conflict rules
    pub fn with_conflicts(mut self, conflicts: IndexMap<String, String>) -> Self {
        self.conflict = conflicts;
        self
    }

    /// Render as pretty-printed JSON, terminated by a newline
    pub fn render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the rendered manifest to `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()?)?;
        Ok(())
    }
}
