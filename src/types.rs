//! Core types for the embedded list pipeline.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Directory layout of the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Files live directly under the content directory.
    Flat,
    /// Three levels: subject directories, topic directories, files.
    Nested,
}

/// One file reference destined for the embedded list.
///
/// `path` is relative to the project root and forward-slash normalized so it
/// can be spliced into the host page verbatim. `subject` and `topic` are set
/// only by the nested scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl FileEntry {
    fn sort_key(&self) -> (Option<&str>, Option<&str>, &str, &str) {
        (
            self.subject.as_deref(),
            self.topic.as_deref(),
            &self.name,
            &self.path,
        )
    }
}

// Total order: (subject, topic, name), ascending, case-sensitive; path breaks
// ties between files that normalize to the same display name. The scanner
// sorts with this before handing entries to the serializer.
impl Ord for FileEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for FileEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: Option<&str>, topic: Option<&str>, name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: String::new(),
            subject: subject.map(str::to_string),
            topic: topic.map(str::to_string),
        }
    }

    #[test]
    fn orders_by_subject_then_topic_then_name() {
        let mut entries = vec![
            entry(Some("Histologia"), Some("TP 1"), "aula_1"),
            entry(Some("Biologia"), Some("TP 2"), "aula_2"),
            entry(Some("Biologia"), Some("TP 1"), "aula_9"),
            entry(Some("Biologia"), Some("TP 1"), "aula_3"),
        ];
        entries.sort();
        let keys: Vec<_> = entries
            .iter()
            .map(|e| (e.subject.as_deref(), e.topic.as_deref(), e.name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Some("Biologia"), Some("TP 1"), "aula_3"),
                (Some("Biologia"), Some("TP 1"), "aula_9"),
                (Some("Biologia"), Some("TP 2"), "aula_2"),
                (Some("Histologia"), Some("TP 1"), "aula_1"),
            ]
        );
    }

    #[test]
    fn flat_entries_order_by_name() {
        let mut entries = vec![
            entry(None, None, "b"),
            entry(None, None, "a"),
            entry(None, None, "Z"),
        ];
        entries.sort();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        // Case-sensitive: uppercase sorts before lowercase.
        assert_eq!(names, vec!["Z", "a", "b"]);
    }

    #[test]
    fn flat_json_omits_subject_and_topic() {
        let json = serde_json::to_string(&entry(None, None, "aula_1")).unwrap();
        assert!(!json.contains("subject"));
        assert!(!json.contains("topic"));
    }
}
