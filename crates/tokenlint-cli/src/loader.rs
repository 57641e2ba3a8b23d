//! File loading for token documents and the text files checked alongside them.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a file could not be turned into something a check can use.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the token documents, stylesheet and Tailwind config live.
#[derive(Debug, Clone)]
pub struct TokenSources {
    root: PathBuf,
    tokens_dir: PathBuf,
}

impl TokenSources {
    pub fn new(root: &Path, tokens_dir: Option<&Path>) -> Self {
        let tokens_dir = tokens_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join("src").join("styles").join("tokens"));
        Self {
            root: root.to_path_buf(),
            tokens_dir,
        }
    }

    /// Parses `<tokens_dir>/<file>`.
    pub fn document(&self, file: &str) -> Result<Value, LoadError> {
        load_json(&self.tokens_dir.join(file))
    }

    /// `src/styles/animations.css`, if present.
    pub fn stylesheet(&self) -> Result<Option<String>, LoadError> {
        read_optional(&self.root.join("src").join("styles").join("animations.css"))
    }

    /// `tailwind.config.js`, if present.
    pub fn tailwind_config(&self) -> Result<Option<String>, LoadError> {
        read_optional(&self.root.join("tailwind.config.js"))
    }
}

pub fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Reads and parses a JSON document. Whitespace-only files count as empty.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let text = read_text(path)?;
    if text.trim().is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    let doc = serde_json::from_str(&text).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded document");
    Ok(doc)
}

fn read_optional(path: &Path) -> Result<Option<String>, LoadError> {
    match read_text(path) {
        Ok(text) => Ok(Some(text)),
        Err(LoadError::NotFound { .. }) => {
            debug!(path = %path.display(), "optional file absent");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
