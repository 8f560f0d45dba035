use anyhow::{Context, Result};
use pox_advisories::document::{Author, LoadOptions, Manifest};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "conflicts.toml";

/// The generator configuration file structure (conflicts.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConflictsConfig {
    /// Package metadata of the generated manifest
    pub manifest: ManifestConfig,

    /// Advisory discovery settings
    pub advisories: AdvisoriesConfig,
}

/// Base manifest fields, anything left out keeps its default
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    pub authors: Option<Vec<Author>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdvisoriesConfig {
    /// File extension of advisory documents
    pub extension: Option<String>,

    /// Directory names never descended into
    pub skip_dirs: Option<Vec<String>>,
}

impl ConflictsConfig {
    /// Load configuration from conflicts.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                let config: ConflictsConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some((config_path, config)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<(PathBuf, Self)>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Base manifest with configured fields applied over the defaults
    pub fn manifest(&self) -> Manifest {
        let defaults = Manifest::default();
        let manifest = &self.manifest;

        Manifest {
            name: manifest.name.clone().unwrap_or(defaults.name),
            package_type: manifest.package_type.clone().or(defaults.package_type),
            description: manifest.description.clone().unwrap_or(defaults.description),
            license: manifest.license.clone().unwrap_or(defaults.license),
            authors: manifest.authors.clone().unwrap_or(defaults.authors),
            conflict: defaults.conflict,
        }
    }

    /// Advisory discovery options with configured fields applied over the defaults
    pub fn load_options(&self) -> LoadOptions {
        let defaults = LoadOptions::default();

        LoadOptions {
            extension: self.advisories.extension.clone().unwrap_or(defaults.extension),
            skip_dirs: self.advisories.skip_dirs.clone().unwrap_or(defaults.skip_dirs),
        }
    }
}
