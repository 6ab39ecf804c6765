use std::fs;
use std::path::Path;

use listsync::tooling::cli::{CliContext, Commands};
use listsync::types::ScanMode;
use tempfile::TempDir;

const HOST: &str = r#"<!DOCTYPE html>
<html>
<body>
    <select id="preset"></select>
    <script>
        const PRESET_JSON_FILES = [ // START-LIST
            { name: "stale", path: "json_files/stale.txt" }
        // END-LIST ];
        populateDropdown(PRESET_JSON_FILES);
    </script>
</body>
</html>
"#;

fn write_host(root: &Path) {
    fs::write(root.join("index.html"), HOST).unwrap();
}

fn update(mode: Option<ScanMode>) -> Commands {
    Commands::Update {
        mode,
        dry_run: false,
    }
}

#[test]
fn update_flat_rewrites_host_and_reports_count() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("b.txt"), "").unwrap();
    fs::write(root.join("json_files").join("a (64kbit_AAC).txt"), "").unwrap();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli.execute(&update(None)).unwrap();
    assert_eq!(output, "Updated index.html with 2 entries.");

    let host = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(host.contains(
        "const PRESET_JSON_FILES = [ // START-LIST\n            { name: \"a\", path: \"json_files/a (64kbit_AAC).txt\" },\n            { name: \"b\", path: \"json_files/b.txt\" }\n        // END-LIST ];"
    ));
    assert!(!host.contains("stale"));
    // Everything outside the marked region survives.
    assert!(host.contains("populateDropdown(PRESET_JSON_FILES);"));
    assert!(host.contains("<select id=\"preset\"></select>"));
}

#[test]
fn update_nested_matches_documented_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files").join("Histologia").join("TP 1")).unwrap();
    fs::create_dir_all(root.join("json_files").join("Biologia").join("TP 2")).unwrap();
    fs::write(
        root.join("json_files")
            .join("Histologia")
            .join("TP 1")
            .join("aula_1.txt"),
        "",
    )
    .unwrap();
    fs::write(
        root.join("json_files")
            .join("Biologia")
            .join("TP 2")
            .join("aula_2 (64kbit_AAC).txt"),
        "",
    )
    .unwrap();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli.execute(&update(Some(ScanMode::Nested))).unwrap();
    assert_eq!(output, "Updated index.html with 2 entries.");

    let host = fs::read_to_string(root.join("index.html")).unwrap();
    let biologia = host
        .find("{ name: \"aula_2\", path: \"json_files/Biologia/TP 2/aula_2 (64kbit_AAC).txt\", subject: \"Biologia\", topic: \"TP 2\" }")
        .expect("Biologia entry present");
    let histologia = host
        .find("{ name: \"aula_1\", path: \"json_files/Histologia/TP 1/aula_1.txt\", subject: \"Histologia\", topic: \"TP 1\" }")
        .expect("Histologia entry present");
    assert!(biologia < histologia, "entries must be ordered by subject");
}

#[test]
fn update_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("aula_1.txt"), "").unwrap();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    cli.execute(&update(None)).unwrap();
    let once = fs::read_to_string(root.join("index.html")).unwrap();
    cli.execute(&update(None)).unwrap();
    let twice = fs::read_to_string(root.join("index.html")).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn update_without_markers_fails_and_leaves_host_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("a.txt"), "").unwrap();
    let original = "<script>const PRESET_JSON_FILES = [];</script>";
    fs::write(root.join("index.html"), original).unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let result = cli.execute(&update(None));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
    assert_eq!(
        fs::read_to_string(root.join("index.html")).unwrap(),
        original
    );
}

#[test]
fn empty_tree_writes_empty_list_and_reports_zero() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli.execute(&update(None)).unwrap();
    assert_eq!(output, "Updated index.html with 0 entries.");

    let host = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(host.contains("const PRESET_JSON_FILES = [ // START-LIST\n        // END-LIST ];"));
}

#[test]
fn missing_content_dir_fails_without_touching_host() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let result = cli.execute(&update(None));
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(root.join("index.html")).unwrap(), HOST);
}

#[test]
fn update_dry_run_prints_block_without_writing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("a.txt"), "").unwrap();
    write_host(root);

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::Update {
            mode: None,
            dry_run: true,
        })
        .unwrap();
    assert!(output.starts_with("[ // START-LIST\n"));
    assert!(output.ends_with("// END-LIST ];"));
    assert!(output.contains("{ name: \"a\", path: \"json_files/a.txt\" }"));
    assert_eq!(fs::read_to_string(root.join("index.html")).unwrap(), HOST);
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files").join("Biologia").join("TP 2")).unwrap();
    fs::write(
        root.join("json_files")
            .join("Biologia")
            .join("TP 2")
            .join("aula_2.txt"),
        "",
    )
    .unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::List {
            mode: Some(ScanMode::Nested),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    let entries = parsed
        .get("entries")
        .and_then(|v| v.as_array())
        .expect("entries array should exist");
    let entry = &entries[0];
    assert_eq!(entry.get("name").and_then(|v| v.as_str()), Some("aula_2"));
    assert_eq!(
        entry.get("path").and_then(|v| v.as_str()),
        Some("json_files/Biologia/TP 2/aula_2.txt")
    );
    assert_eq!(
        entry.get("subject").and_then(|v| v.as_str()),
        Some("Biologia")
    );
    assert_eq!(entry.get("topic").and_then(|v| v.as_str()), Some("TP 2"));
}

#[test]
fn project_config_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("lectures")).unwrap();
    fs::write(root.join("lectures").join("a.txt"), "").unwrap();
    fs::write(
        root.join("listsync.toml"),
        "content_dir = \"lectures\"\nhtml_file = \"page.html\"\n",
    )
    .unwrap();
    fs::write(
        root.join("page.html"),
        "<script>const FILES = [ // START-LIST\n// END-LIST ];</script>",
    )
    .unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli.execute(&update(None)).unwrap();
    assert_eq!(output, "Updated page.html with 1 entries.");

    let host = fs::read_to_string(root.join("page.html")).unwrap();
    assert!(host.contains("{ name: \"a\", path: \"lectures/a.txt\" }"));
}

#[test]
fn rename_dry_run_reports_plan_without_touching_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("Aula 1.txt"), "").unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::Rename {
            dry_run: true,
            force: false,
        })
        .unwrap();
    assert!(output.contains("aula_1.txt"));
    assert!(output.contains("Total: 1 files to rename."));
    assert!(root.join("json_files").join("Aula 1.txt").exists());
}

#[test]
fn rename_force_applies_plan() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("Aula 1.txt"), "").unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::Rename {
            dry_run: false,
            force: true,
        })
        .unwrap();
    assert!(output.contains("Renamed 1 files (0 skipped)."));
    assert!(root.join("json_files").join("aula_1.txt").exists());
    assert!(!root.join("json_files").join("Aula 1.txt").exists());
}

#[test]
fn rename_with_clean_tree_reports_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("json_files")).unwrap();
    fs::write(root.join("json_files").join("aula_1.txt"), "").unwrap();

    let cli = CliContext::new(root.to_path_buf(), None).unwrap();
    let output = cli
        .execute(&Commands::Rename {
            dry_run: false,
            force: true,
        })
        .unwrap();
    assert_eq!(output, "Nothing to rename.");
}
