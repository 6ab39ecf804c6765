//! Format scanned entries as the literal array body of the host page.

use crate::types::FileEntry;

/// Render entries as newline-and-comma separated record literals.
///
/// String fields go through JSON encoding so quotes, backslashes, and control
/// characters stay valid inside the host script. Indentation matches the
/// hand-authored block the patcher replaces. Flat entries carry only
/// `name`/`path`; nested entries add `subject`/`topic`.
pub fn render_entries(entries: &[FileEntry]) -> Result<String, serde_json::Error> {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut fields = vec![
            format!("name: {}", serde_json::to_string(&entry.name)?),
            format!("path: {}", serde_json::to_string(&entry.path)?),
        ];
        if let Some(subject) = &entry.subject {
            fields.push(format!("subject: {}", serde_json::to_string(subject)?));
        }
        if let Some(topic) = &entry.topic {
            fields.push(format!("topic: {}", serde_json::to_string(topic)?));
        }
        lines.push(format!("            {{ {} }}", fields.join(", ")));
    }
    Ok(lines.join(",\n"))
}
