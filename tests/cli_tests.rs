//! Integration tests for the pathmirror binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the pathmirror binary.
fn pathmirror_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("pathmirror");
    path
}

/// Run pathmirror against `root` and return the output.
fn run_pathmirror(root: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(pathmirror_bin())
        .arg("--root")
        .arg(root)
        .args(args)
        .env("PATHMIRROR_CONFIG", root.join("no-such-config.toml"))
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute pathmirror");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let status = output.status.code().unwrap_or(-1);

    (stdout, stderr, status)
}

fn create_test_structure() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("Sub One/inner")).unwrap();
    fs::write(root.join("Sub One/a.txt"), "a").unwrap();
    fs::write(root.join("notes.md"), "n").unwrap();
    temp_dir
}

#[test]
fn test_ls_root() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["ls"]);

    assert_eq!(status, 0);
    assert!(stdout.contains("Contents of"));
    assert!(stdout.contains("[Dir] Sub_One"));
    assert!(stdout.contains("[File] notes_md"));
}

#[test]
fn test_ls_nested() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["ls", "Sub_One"]);

    assert_eq!(status, 0);
    assert!(stdout.contains("[Dir] inner"));
    assert!(stdout.contains("[File] a_txt"));
}

#[test]
fn test_get_file_path() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["get", "Sub_One/a_txt"]);

    assert_eq!(status, 0);
    assert_eq!(
        stdout.trim(),
        temp_dir.path().join("Sub One/a.txt").display().to_string()
    );
}

#[test]
fn test_get_missing_fails() {
    let temp_dir = create_test_structure();
    let (_stdout, stderr, status) = run_pathmirror(temp_dir.path(), &["get", "ghost"]);

    assert_ne!(status, 0);
    assert!(stderr.contains("'ghost' not found"));
}

#[test]
fn test_tree_json() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["tree", "--json"]);

    assert_eq!(status, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["subfolders"]["Sub_One"]["name"], "Sub One");
    assert!(value["files"]["notes_md"].is_string());
}

#[test]
fn test_tree_text() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["tree"]);

    assert_eq!(status, 0);
    assert!(stdout.contains("Sub_One/ (Sub One)"));
    assert!(stdout.contains("2 folders, 2 files"));
}

#[test]
fn test_mkdir_creates_chain() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) =
        run_pathmirror(temp_dir.path(), &["mkdir", "--in", "Sub_One", "x", "y z"]);

    assert_eq!(status, 0);
    assert!(stdout.contains("Created"));
    assert!(temp_dir.path().join("Sub One/x/y z").is_dir());
}

#[test]
fn test_rm_file() {
    let temp_dir = create_test_structure();
    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["rm", "notes_md"]);

    assert_eq!(status, 0);
    assert!(stdout.contains("File 'notes md' has been removed"));
    assert!(!temp_dir.path().join("notes.md").exists());
}

#[test]
fn test_rm_folder_requires_force() {
    let temp_dir = create_test_structure();

    let (_stdout, stderr, status) = run_pathmirror(temp_dir.path(), &["rm", "Sub One"]);
    assert_ne!(status, 0);
    assert!(stderr.contains("cannot be undone"));
    assert!(temp_dir.path().join("Sub One").exists());

    let (stdout, _stderr, status) = run_pathmirror(temp_dir.path(), &["rm", "Sub One", "--force"]);
    assert_eq!(status, 0);
    assert!(stdout.contains("Subfolder 'Sub One' has been removed"));
    assert!(!temp_dir.path().join("Sub One").exists());
}

#[test]
fn test_rm_missing_fails() {
    let temp_dir = create_test_structure();
    let (_stdout, stderr, status) = run_pathmirror(temp_dir.path(), &["rm", "ghost"]);

    assert_ne!(status, 0);
    assert!(stderr.contains("'ghost' not found"));
}

#[test]
fn test_search_path_export() {
    let temp_dir = create_test_structure();
    let existing = std::env::join_paths([Path::new("/first"), Path::new("/second")]).unwrap();

    let output = Command::new(pathmirror_bin())
        .arg("--root")
        .arg(temp_dir.path())
        .args(["search-path", "Sub_One", "--var", "PATHMIRROR_TEST_PATH"])
        .env("PATHMIRROR_TEST_PATH", &existing)
        .env("PATHMIRROR_CONFIG", temp_dir.path().join("no-such-config.toml"))
        .output()
        .expect("Failed to execute pathmirror");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    assert!(output.status.success());
    assert!(stdout.contains("# Inserted"));
    let expected = std::env::join_paths([
        PathBuf::from("/first"),
        temp_dir.path().join("Sub One"),
        PathBuf::from("/second"),
    ])
    .unwrap();
    assert!(stdout.contains(&format!(
        "export PATHMIRROR_TEST_PATH=\"{}\"",
        expected.to_string_lossy()
    )));
}

#[test]
fn test_search_path_invalid_strategy() {
    let temp_dir = create_test_structure();
    let (_stdout, stderr, status) =
        run_pathmirror(temp_dir.path(), &["search-path", "--strategy", "sideways"]);

    assert_ne!(status, 0);
    assert!(stderr.contains("sideways"));
}

#[test]
fn test_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (_stdout, stderr, status) = run_pathmirror(&temp_dir.path().join("missing"), &["ls"]);

    assert_ne!(status, 0);
    assert!(stderr.contains("read directory"));
}
