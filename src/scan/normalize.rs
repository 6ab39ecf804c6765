//! Filename cleanup: display names for the embedded list and web-safe slugs
//! for the rename pass.

use crate::error::SyncError;
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips the extension (and an optional trailing audio annotation such as
/// `(64kbit_AAC)`) from raw filenames to produce display names.
pub struct NameNormalizer {
    pattern: Regex,
}

impl NameNormalizer {
    /// Build a normalizer for the given extension (without the leading dot).
    pub fn new(extension: &str) -> Result<Self, SyncError> {
        let pattern = Regex::new(&format!(
            r"(?i)(\s\(\d+kbit_AAC\))?\.{}$",
            regex::escape(extension)
        ))
        .map_err(|e| SyncError::Config(format!("invalid extension pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Whether a filename carries the target extension (case-insensitive).
    pub fn matches(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }

    /// Derive the display name. Matching is anchored at the end of the
    /// string; no trimming or case change is applied.
    pub fn display_name(&self, raw: &str) -> String {
        self.pattern.replace(raw, "").into_owned()
    }
}

static AUDIO_ANNOTATION: OnceLock<Regex> = OnceLock::new();

fn audio_annotation() -> &'static Regex {
    AUDIO_ANNOTATION.get_or_init(|| {
        Regex::new(r"(?i)\s*\(\d+kbit_aac\)").expect("audio annotation pattern")
    })
}

/// Convert a filename into a web-safe slug, keeping the extension.
///
/// Lowercases the stem, drops the audio annotation, folds accents via NFD
/// decomposition, and collapses every other character run into a single
/// underscore. An empty result falls back to `file`.
pub fn slugify(filename: &str) -> String {
    let (stem, ext) = split_extension(filename);
    let lowered = stem.to_lowercase();
    let stripped = audio_annotation().replace_all(&lowered, "");
    let folded: String = stripped
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut separated = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if separated && !slug.is_empty() {
                slug.push('_');
            }
            separated = false;
            slug.push(c);
        } else {
            separated = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("file");
    }
    slug.push_str(ext);
    slug
}

/// Split `name.ext` into (`name`, `.ext`). A leading dot alone is not an
/// extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename.split_at(idx),
        _ => (filename, ""),
    }
}
