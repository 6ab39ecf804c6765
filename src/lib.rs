//! Listsync: Embedded Page-List Regeneration
//!
//! Scans a content tree of text files and rewrites the marker-delimited list
//! block inside a host HTML page, so the page's dropdown can reference the
//! files without a server.

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod rename;
pub mod scan;
pub mod tooling;
pub mod types;
