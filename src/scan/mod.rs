//! Directory scanning for candidate entries.
//!
//! The scanner walks the content tree in one of two fixed layouts and
//! produces the ordered [`FileEntry`] set consumed by the serializer. Raw
//! listing goes through the minimal [`DirectoryLister`] seam so the traversal
//! logic stays portable and testable.

pub mod normalize;

use crate::error::ScanError;
use crate::scan::normalize::NameNormalizer;
use crate::types::{FileEntry, ScanMode};
use std::fs;
use std::path::Path;
use tracing::debug;

/// What kind of entry a listing produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, devices, and anything else the scanner ignores.
    Other,
}

/// One raw directory entry with the information the scanner needs.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
    pub hidden: bool,
}

/// Minimal listing interface: directory entries with type and hidden flag.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListingEntry>, ScanError>;
}

/// Production lister backed by `std::fs`.
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListingEntry>, ScanError> {
        let read = fs::read_dir(dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::MissingRoot(dir.to_path_buf())
            } else {
                ScanError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let mut entries = Vec::new();
        for dir_entry in read {
            let dir_entry = dir_entry.map_err(|e| ScanError::ReadDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let file_type = dir_entry.file_type().map_err(|e| ScanError::Metadata {
                path: dir_entry.path(),
                source: e,
            })?;
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let hidden = name.starts_with('.');
            entries.push(ListingEntry { name, kind, hidden });
        }
        Ok(entries)
    }
}

/// Join path segments with forward slashes regardless of host conventions.
pub fn web_path(segments: &[&str]) -> String {
    segments.join("/")
}

/// Forward-slash form of a relative directory path, for use as the leading
/// web-path segment.
pub fn web_base(dir: &Path) -> String {
    let segments: Vec<String> = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.join("/")
}

/// Content tree scanner.
pub struct Scanner<'a> {
    lister: &'a dyn DirectoryLister,
    normalizer: &'a NameNormalizer,
}

impl<'a> Scanner<'a> {
    pub fn new(lister: &'a dyn DirectoryLister, normalizer: &'a NameNormalizer) -> Self {
        Self { lister, normalizer }
    }

    /// Scan `root` in the given layout.
    ///
    /// `base` is the forward-slash segment prepended to every produced path
    /// (typically the content directory name). Entries come back sorted by
    /// (subject, topic, name), so the serializer can splice them directly.
    pub fn scan(&self, root: &Path, base: &str, mode: ScanMode) -> Result<Vec<FileEntry>, ScanError> {
        let mut entries = match mode {
            ScanMode::Flat => self.scan_flat(root, base)?,
            ScanMode::Nested => self.scan_nested(root, base)?,
        };
        entries.sort();
        debug!(count = entries.len(), ?mode, "scanned content tree");
        Ok(entries)
    }

    fn scan_flat(&self, root: &Path, base: &str) -> Result<Vec<FileEntry>, ScanError> {
        let mut entries = Vec::new();
        for item in self.lister.list(root)? {
            if item.kind != EntryKind::File || item.hidden || !self.normalizer.matches(&item.name) {
                continue;
            }
            entries.push(FileEntry {
                name: self.normalizer.display_name(&item.name),
                path: web_path(&[base, &item.name]),
                subject: None,
                topic: None,
            });
        }
        Ok(entries)
    }

    fn scan_nested(&self, root: &Path, base: &str) -> Result<Vec<FileEntry>, ScanError> {
        let mut entries = Vec::new();
        for subject in self.lister.list(root)? {
            if subject.kind != EntryKind::Directory || subject.hidden {
                continue;
            }
            let subject_dir = root.join(&subject.name);
            for topic in self.lister.list(&subject_dir)? {
                if topic.kind != EntryKind::Directory || topic.hidden {
                    continue;
                }
                let topic_dir = subject_dir.join(&topic.name);
                for item in self.lister.list(&topic_dir)? {
                    if item.kind != EntryKind::File
                        || item.hidden
                        || !self.normalizer.matches(&item.name)
                    {
                        continue;
                    }
                    entries.push(FileEntry {
                        name: self.normalizer.display_name(&item.name),
                        path: web_path(&[base, &subject.name, &topic.name, &item.name]),
                        subject: Some(subject.name.clone()),
                        topic: Some(topic.name.clone()),
                    });
                }
            }
        }
        Ok(entries)
    }
}
