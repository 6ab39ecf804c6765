//! Filename slugging across the content tree.
//!
//! Companion pass to the list update: rewrites content filenames into
//! web-safe slugs so generated references stay stable across hosts. Runs in
//! two phases, a deterministic plan followed by an explicit apply; a rename
//! whose target already exists is skipped, never overwritten.

use crate::error::{RenameError, SyncError};
use crate::scan::normalize::slugify;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// One pending rename.
#[derive(Debug, Clone)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

/// Counts reported after applying a plan.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    pub renamed: usize,
    pub skipped: usize,
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect every content file (any depth, hidden entries pruned) whose name
/// differs from its slug. Sorted by path so repeated runs report identically.
pub fn plan_renames(root: &Path, extension: &str) -> Result<Vec<PlannedRename>, SyncError> {
    let suffix = format!(".{}", extension.to_lowercase());
    let mut plan = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(|e| RenameError::Walk {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.to_lowercase().ends_with(&suffix) {
            continue;
        }
        let new_name = slugify(&name);
        if new_name == name {
            continue;
        }
        plan.push(PlannedRename {
            from: entry.path().to_path_buf(),
            to: entry.path().with_file_name(&new_name),
            old_name: name,
            new_name,
        });
    }
    plan.sort_by(|a, b| a.from.cmp(&b.from));
    Ok(plan)
}

/// Apply a rename plan.
pub fn apply_renames(plan: &[PlannedRename]) -> Result<RenameOutcome, SyncError> {
    let mut outcome = RenameOutcome::default();
    for item in plan {
        if item.to.exists() {
            warn!(
                to = %item.to.display(),
                "target exists, skipping rename of {}", item.old_name
            );
            outcome.skipped += 1;
            continue;
        }
        std::fs::rename(&item.from, &item.to).map_err(|e| RenameError::Rename {
            from: item.from.clone(),
            to: item.to.clone(),
            source: e,
        })?;
        outcome.renamed += 1;
    }
    Ok(outcome)
}

/// Format a rename plan as human-readable text.
pub fn format_rename_plan_text(plan: &[PlannedRename]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", "Rename plan".bold().underline()));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Current", "New"]);
    for item in plan {
        table.add_row(vec![item.old_name.clone(), item.new_name.clone()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} files to rename.\n", plan.len()));
    out
}
