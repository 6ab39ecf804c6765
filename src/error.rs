//! Error types for scanning, rendering, patching, and renaming.
//!
//! Every operation is fatal on first error: the host document is either fully
//! updated or left untouched, and nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning the content tree.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while patching the host document.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("markers '{start}' and '{end}' not found in {}", path.display())]
    MarkersNotFound {
        path: PathBuf,
        start: &'static str,
        end: &'static str,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised by the filename slugger.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error type returned by every CLI operation.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Rename(#[from] RenameError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
