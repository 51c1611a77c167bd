//! sgf-doc: YAML/JSON graph documents that feed the SGF encoder.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_doc};

use std::path::{Path, PathBuf};

pub type DocResult<T> = Result<T, DocError>;

#[derive(thiserror::Error, Debug)]
pub enum DocError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported document format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Yaml,
    Json,
}

impl DocFormat {
    pub fn from_path(path: &Path) -> DocResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(DocFormat::Yaml),
            Some("json") => Ok(DocFormat::Json),
            _ => Err(DocError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a document, picking the format from the file extension.
pub fn load(path: &Path) -> DocResult<GraphDoc> {
    match DocFormat::from_path(path)? {
        DocFormat::Yaml => load_yaml(path),
        DocFormat::Json => load_json(path),
    }
}

pub fn load_yaml(path: &Path) -> DocResult<GraphDoc> {
    let content = std::fs::read_to_string(path)?;
    let doc: GraphDoc = serde_yaml::from_str(&content)?;
    validate_doc(&doc)?;
    tracing::debug!(path = %path.display(), nodes = doc.nodes.len(), "loaded YAML graph document");
    Ok(doc)
}

pub fn save_yaml(path: &Path, doc: &GraphDoc) -> DocResult<()> {
    validate_doc(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> DocResult<GraphDoc> {
    let content = std::fs::read_to_string(path)?;
    let doc: GraphDoc = serde_json::from_str(&content)?;
    validate_doc(&doc)?;
    tracing::debug!(path = %path.display(), nodes = doc.nodes.len(), "loaded JSON graph document");
    Ok(doc)
}

pub fn save_json(path: &Path, doc: &GraphDoc) -> DocResult<()> {
    validate_doc(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}
