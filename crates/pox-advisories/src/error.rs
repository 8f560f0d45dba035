use std::path::PathBuf;
use thiserror::Error;

use crate::constraint::ConstraintError;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk advisories directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid advisory {}: {source}", path.display())]
    InvalidAdvisory {
        path: PathBuf,
        source: DocumentError,
    },

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Decoding failure of a single advisory document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
