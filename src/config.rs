//! Configuration loading.
//!
//! The original tool kept its paths in module-level constants; here they live
//! in an explicit [`SyncConfig`] passed into the scanner and patcher.
//! Precedence: defaults -> `listsync.toml` in the project root -> `LISTSYNC__`
//! environment overlay.

use crate::error::SyncError;
use crate::logging::LoggingConfig;
use crate::types::ScanMode;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Content tree scanned for entries, relative to the project root.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Host page carrying the marked list block, relative to the project root.
    #[serde(default = "default_html_file")]
    pub html_file: PathBuf,

    /// Target file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Layout used when the command gives no `--mode`.
    #[serde(default = "default_mode")]
    pub mode: ScanMode,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("json_files")
}

fn default_html_file() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_mode() -> ScanMode {
    ScanMode::Flat
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            html_file: default_html_file(),
            extension: default_extension(),
            mode: default_mode(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root.
    ///
    /// Reads `<root>/listsync.toml` when present, then applies the
    /// environment overlay (`LISTSYNC__` prefix, `__` separator).
    pub fn load(root: &Path) -> Result<SyncConfig, SyncError> {
        let mut builder = Config::builder();
        let file = root.join("listsync.toml");
        if file.is_file() {
            builder = builder.add_source(File::from(file));
        }
        builder = builder.add_source(
            Environment::with_prefix("LISTSYNC")
                .separator("__")
                .try_parsing(true),
        );
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SyncError::Config(e.to_string()))
    }

    /// Load configuration from a specific file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<SyncConfig, SyncError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("LISTSYNC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SyncError::Config(e.to_string()))
    }
}
