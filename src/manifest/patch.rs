//! Marker-based patching of the host document.
//!
//! The replaceable region is an assignment whose array literal opens with a
//! `// START-LIST` comment and closes with `// END-LIST ];`. The region is
//! located by explicit substring offsets, not a backtracking pattern, and the
//! exact marker tokens and bracket/semicolon frame are reproduced on every
//! write so hand-authored documents round-trip.

use crate::error::PatchError;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

pub const START_MARKER: &str = "// START-LIST";
pub const END_MARKER: &str = "// END-LIST";

/// Byte range of the region to replace: from the opening `[` through the
/// closing `];`, inclusive.
fn locate_region(doc: &str) -> Option<(usize, usize)> {
    let marker = doc.find(START_MARKER)?;
    let head = doc[..marker].trim_end();
    if !head.ends_with('[') {
        return None;
    }
    let bracket = head.len() - 1;
    // The array must belong to an assignment, not a bare literal.
    if !head[..bracket].trim_end().ends_with('=') {
        return None;
    }

    let end_marker = marker + doc[marker..].find(END_MARKER)?;
    let after_end = end_marker + END_MARKER.len();
    let tail = &doc[after_end..];
    let trimmed = tail.trim_start();
    if !trimmed.starts_with("];") {
        return None;
    }
    let close = after_end + (tail.len() - trimmed.len()) + 2;
    Some((bracket, close))
}

/// Build the replacement block for a rendered entry body.
pub fn render_block(body: &str) -> String {
    let mut block = String::new();
    block.push_str("[ ");
    block.push_str(START_MARKER);
    block.push('\n');
    if !body.is_empty() {
        block.push_str(body);
        block.push('\n');
    }
    block.push_str("        ");
    block.push_str(END_MARKER);
    block.push_str(" ];");
    block
}

/// Replace the marked region with a freshly rendered block.
///
/// Returns `None` when the document carries no well-formed marked region.
pub fn splice_list(doc: &str, body: &str) -> Option<String> {
    let (start, end) = locate_region(doc)?;
    let mut updated = String::with_capacity(doc.len());
    updated.push_str(&doc[..start]);
    updated.push_str(&render_block(body));
    updated.push_str(&doc[end..]);
    Some(updated)
}

/// Patch the host document in place.
///
/// The document is fully read, spliced in memory, and written back through a
/// sibling temp file + rename so a failed write never leaves a truncated
/// host page. On a markers-not-found error the file is untouched.
pub fn patch_file(path: &Path, body: &str) -> Result<(), PatchError> {
    let doc = fs::read_to_string(path).map_err(|e| PatchError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let updated = splice_list(&doc, body).ok_or_else(|| PatchError::MarkersNotFound {
        path: path.to_path_buf(),
        start: START_MARKER,
        end: END_MARKER,
    })?;
    write_atomic(path, &updated).map_err(|e| PatchError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(host = %path.display(), "patched embedded list");
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "host".to_string());
    let tmp = path.with_file_name(format!("{}.tmp", file_name));
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
