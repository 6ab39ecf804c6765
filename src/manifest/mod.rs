//! Rendering and splicing of the embedded list block.

pub mod format;
pub mod patch;

pub use format::render_entries;
pub use patch::{patch_file, render_block, splice_list, END_MARKER, START_MARKER};
