//! Integration tests for the `loxide` binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Helper function to get the path to the loxide binary
fn loxide_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test executable name
    path.pop(); // Remove "deps"
    path.push("loxide");
    path
}

/// Helper function to create a test script
fn create_script(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_scan_valid_script() {
    let temp_dir = TempDir::new().unwrap();
    let script = create_script(&temp_dir, "valid.lox", "print 3.14;\n");

    let output = Command::new(loxide_bin()).arg(&script).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PRINT print"));
    assert!(stdout.contains("NUMBER 3.14 3.14"));
    assert!(stdout.contains("SEMICOLON ;"));
    assert!(stdout.contains("EOF"));
}

#[test]
fn test_lexical_errors_exit_65() {
    let temp_dir = TempDir::new().unwrap();
    let script = create_script(&temp_dir, "invalid.lox", "var x = @;\n");

    let output = Command::new(loxide_bin()).arg(&script).output().unwrap();

    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[line 1] Error: Unexpected character: '@'"));
}

#[test]
fn test_tokens_still_print_when_source_has_errors() {
    let temp_dir = TempDir::new().unwrap();
    let script = create_script(&temp_dir, "mixed.lox", "1 @ 2\n");

    let output = Command::new(loxide_bin()).arg(&script).output().unwrap();

    assert_eq!(output.status.code(), Some(65));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NUMBER 1 1"));
    assert!(stdout.contains("NUMBER 2 2"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let script = create_script(&temp_dir, "sum.lox", "1 + 2");

    let output = Command::new(loxide_bin())
        .arg("--json")
        .arg(&script)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tokens = json.as_array().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0]["kind"], "NUMBER");
    assert_eq!(tokens[0]["line"], 1);
    assert_eq!(tokens[1]["kind"], "PLUS");
    assert_eq!(tokens[2]["kind"], "NUMBER");
    assert_eq!(tokens[3]["kind"], "EOF");
}

#[test]
fn test_unterminated_string_recovers_with_65() {
    let temp_dir = TempDir::new().unwrap();
    let script = create_script(&temp_dir, "open.lox", "var s = \"oops;\n");

    let output = Command::new(loxide_bin()).arg(&script).output().unwrap();

    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unterminated string"));
}

#[test]
fn test_nonexistent_script_fails() {
    let output = Command::new(loxide_bin())
        .arg("/nonexistent/path/script.lox")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(65));
}

#[test]
fn test_version_flag() {
    let output = Command::new(loxide_bin())
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
