//! CLI Tooling
//!
//! Command-line interface for the list update pipeline and the filename
//! slugger. Every operation returns its printable output; the binary owns
//! stdout/stderr and the exit status.

use crate::config::{ConfigLoader, SyncConfig};
use crate::error::SyncError;
use crate::manifest;
use crate::rename;
use crate::scan::{web_base, FsLister, Scanner};
use crate::scan::normalize::NameNormalizer;
use crate::types::{FileEntry, ScanMode};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Listsync CLI - embedded page-list regeneration
#[derive(Parser)]
#[command(name = "listsync")]
#[command(about = "Regenerate the embedded file list of a static web page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root containing the content tree and host page
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the content tree and rewrite the embedded list in the host page
    Update {
        /// Directory layout to scan (overrides config)
        #[arg(long, value_enum)]
        mode: Option<ScanMode>,

        /// Print the rendered block without touching the host page
        #[arg(long)]
        dry_run: bool,
    },
    /// List scanned entries without touching the host page
    List {
        /// Directory layout to scan (overrides config)
        #[arg(long, value_enum)]
        mode: Option<ScanMode>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rewrite content filenames as web-safe slugs
    Rename {
        /// Report the rename plan without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// JSON contract for `list --format json`.
#[derive(Serialize)]
struct ListOutput<'a> {
    entries: &'a [FileEntry],
    total: usize,
}

/// CLI context binding a project root to its configuration.
pub struct CliContext {
    config: SyncConfig,
    root: PathBuf,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SyncError> {
        let root = dunce::canonicalize(&root).map_err(|e| {
            SyncError::Config(format!("invalid project root {}: {}", root.display(), e))
        })?;
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        Ok(Self { config, root })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, SyncError> {
        match command {
            Commands::Update { mode, dry_run } => self.handle_update(*mode, *dry_run),
            Commands::List { mode, format } => self.handle_list(*mode, format),
            Commands::Rename { dry_run, force } => self.handle_rename(*dry_run, *force),
        }
    }

    fn scan_entries(&self, mode: Option<ScanMode>) -> Result<Vec<FileEntry>, SyncError> {
        let mode = mode.unwrap_or(self.config.mode);
        let normalizer = NameNormalizer::new(&self.config.extension)?;
        let lister = FsLister;
        let scanner = Scanner::new(&lister, &normalizer);
        let content_root = self.root.join(&self.config.content_dir);
        let base = web_base(&self.config.content_dir);
        Ok(scanner.scan(&content_root, &base, mode)?)
    }

    fn handle_update(&self, mode: Option<ScanMode>, dry_run: bool) -> Result<String, SyncError> {
        let entries = self.scan_entries(mode)?;
        let body = manifest::render_entries(&entries)?;
        if dry_run {
            return Ok(manifest::render_block(&body));
        }
        let host = self.root.join(&self.config.html_file);
        manifest::patch_file(&host, &body)?;
        info!(count = entries.len(), host = %host.display(), "embedded list updated");
        Ok(format!(
            "Updated {} with {} entries.",
            self.config.html_file.display(),
            entries.len()
        ))
    }

    fn handle_list(&self, mode: Option<ScanMode>, format: &str) -> Result<String, SyncError> {
        let entries = self.scan_entries(mode)?;
        if format == "json" {
            let output = ListOutput {
                entries: &entries,
                total: entries.len(),
            };
            return Ok(serde_json::to_string_pretty(&output)?);
        }
        Ok(format_entries_text(&entries))
    }

    fn handle_rename(&self, dry_run: bool, force: bool) -> Result<String, SyncError> {
        let content_root = self.root.join(&self.config.content_dir);
        let plan = rename::plan_renames(&content_root, &self.config.extension)?;
        if plan.is_empty() {
            return Ok("Nothing to rename.".to_string());
        }

        let mut out = rename::format_rename_plan_text(&plan);
        if dry_run {
            return Ok(out);
        }

        if !force {
            let confirmed = dialoguer::Confirm::new()
                .with_prompt(format!("Rename {} files?", plan.len()))
                .interact()
                .map_err(|e| SyncError::Config(format!("Failed to get user input: {}", e)))?;
            if !confirmed {
                return Ok("Rename cancelled.".to_string());
            }
        }

        let outcome = rename::apply_renames(&plan)?;
        out.push_str(&format!(
            "Renamed {} files ({} skipped).\n",
            outcome.renamed, outcome.skipped
        ));
        Ok(out)
    }
}

fn format_entries_text(entries: &[FileEntry]) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }
    let nested = entries.iter().any(|e| e.subject.is_some());
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if nested {
        table.set_header(vec!["Subject", "Topic", "Name", "Path"]);
        for entry in entries {
            table.add_row(vec![
                entry.subject.clone().unwrap_or_default(),
                entry.topic.clone().unwrap_or_default(),
                entry.name.clone(),
                entry.path.clone(),
            ]);
        }
    } else {
        table.set_header(vec!["Name", "Path"]);
        for entry in entries {
            table.add_row(vec![entry.name.clone(), entry.path.clone()]);
        }
    }
    format!("{}\n\nTotal: {} entries.\n", table, entries.len())
}
