use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::AdvisoryData;
use crate::advisory::Advisory;
use crate::error::{AdvisoryError, DocumentError, Result};

/// Encoding of an advisory document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryFormat {
    Yaml,
    Json,
}

impl AdvisoryFormat {
    /// Pick the decoder for a file extension. Anything but `json` is read as YAML.
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case("json") {
            AdvisoryFormat::Json
        } else {
            AdvisoryFormat::Yaml
        }
    }

    fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|ext| Self::from_extension(&ext.to_string_lossy()))
            .unwrap_or(AdvisoryFormat::Yaml)
    }
}

/// Options controlling which files of an advisories tree are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// File extension of advisory documents, without the leading dot
    pub extension: String,

    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extension: "yaml".to_string(),
            skip_dirs: vec!["vendor".to_string()],
        }
    }
}

impl LoadOptions {
    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.skip_dirs.iter().any(|dir| *dir == name)
    }

    fn is_advisory(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }
}

/// Parse a single advisory document
pub fn parse_advisory(
    content: &str,
    format: AdvisoryFormat,
) -> std::result::Result<Advisory, DocumentError> {
    let data: AdvisoryData = match format {
        AdvisoryFormat::Yaml => serde_yaml::from_str(content)?,
        AdvisoryFormat::Json => serde_json::from_str(content)?,
    };
    Ok(Advisory::from_data(data))
}

/// Load and parse a single advisory file, decoded according to its extension
pub fn load_advisory(path: &Path) -> Result<Advisory> {
    let content = fs::read_to_string(path)?;
    parse_advisory(&content, AdvisoryFormat::from_path(path)).map_err(|source| {
        AdvisoryError::InvalidAdvisory {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Recursively load every advisory below `root`.
///
/// Files are visited in file name order so the generated output is stable.
pub fn find_advisories(root: &Path, options: &LoadOptions) -> Result<Vec<Advisory>> {
    let mut advisories = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_skipped(entry));

    for entry in walker {
        let entry = entry?;
        if !options.is_advisory(&entry) {
            continue;
        }

        log::debug!("Loading advisory {}", entry.path().display());
        advisories.push(load_advisory(entry.path())?);
    }

    log::debug!("Loaded {} advisories from {}", advisories.len(), root.display());

    Ok(advisories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_advisory() {
        let content = r#"title:     'CVE-2015-0001: Some vulnerability'
link:      https://example.com/advisory
cve:       CVE-2015-0001
branches:
    1.0.x:
        time:     2015-01-01 10:00:00
        versions: ['>=1.0', '<1.0.5']
    2.0.x:
        time:     ~
        versions: ['>=2.0', '<2.0.1']
reference: composer://foo/bar
"#;

        let advisory = parse_advisory(content, AdvisoryFormat::Yaml).unwrap();
        assert_eq!(advisory.component_name(), "foo/bar");
        assert_eq!(advisory.constraint().as_deref(), Some(">=1,<1.0.5|>=2,<2.0.1"));
    }

    #[test]
    fn test_parse_json_advisory_strips_reference_prefix() {
        let advisory = parse_advisory(
            r#"{"reference": "composer://foo/bar", "branches": {"1.x": {"versions": [">=1.0", "<1.1"]}}}"#,
            AdvisoryFormat::Json,
        )
        .unwrap();

        assert_eq!(advisory.component_name(), "foo/bar");
        assert_eq!(advisory.constraint().as_deref(), Some(">=1,<1.1"));
    }

    #[test]
    fn test_parse_advisory_rejects_invalid_documents() {
        assert!(matches!(
            parse_advisory("{", AdvisoryFormat::Json),
            Err(DocumentError::Json(_))
        ));
        assert!(matches!(
            parse_advisory("reference: [", AdvisoryFormat::Yaml),
            Err(DocumentError::Yaml(_))
        ));
        assert!(matches!(
            parse_advisory("reference: foo/bar\n", AdvisoryFormat::Yaml),
            Err(DocumentError::Yaml(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(AdvisoryFormat::from_extension("yaml"), AdvisoryFormat::Yaml);
        assert_eq!(AdvisoryFormat::from_extension("yml"), AdvisoryFormat::Yaml);
        assert_eq!(AdvisoryFormat::from_extension("json"), AdvisoryFormat::Json);
        assert_eq!(AdvisoryFormat::from_extension("JSON"), AdvisoryFormat::Json);
        assert_eq!(AdvisoryFormat::from_path(Path::new("a/b.json")), AdvisoryFormat::Json);
        assert_eq!(AdvisoryFormat::from_path(Path::new("a/b")), AdvisoryFormat::Yaml);
    }

    #[test]
    fn test_default_options() {
        let options = LoadOptions::default();
        assert_eq!(options.extension, "yaml");
        assert_eq!(options.skip_dirs, vec!["vendor"]);
    }
}
