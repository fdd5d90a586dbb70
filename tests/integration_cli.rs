//! End-to-end tests for the scriptmeta binary.
//!
//! Each test writes a script file into a temporary directory, runs the
//! binary against it, and checks stdout/stderr and the exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn scriptmeta() -> Command {
    Command::cargo_bin("scriptmeta").unwrap()
}

#[test]
fn test_prints_metadata_as_toml() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        r#"# /// script
# requires-python = ">=3.12"
# dependencies = []
# ///

print("hello")
"#,
    );

    scriptmeta()
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"requires-python = ">=3.12""#))
        .stdout(predicate::str::contains("dependencies = []"));
}

#[test]
fn test_prints_metadata_as_json() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// script\n# requires-python = \">=3.12\"\n# ///\n",
    );

    scriptmeta()
        .arg("--format")
        .arg("json")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""requires-python": ">=3.12""#));
}

#[test]
fn test_no_metadata_found() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "plain.py", "import sys\nprint(sys.argv)\n");

    scriptmeta()
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("No metadata found."));
}

#[test]
fn test_other_block_type_is_not_metadata() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// test\n# key = \"value\"\n# ///\n",
    );

    scriptmeta()
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("No metadata found."));
}

#[test]
fn test_block_type_flag_selects_other_blocks() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// test\n# key = \"value\"\n# ///\n",
    );

    scriptmeta()
        .arg("--block-type")
        .arg("test")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"key = "value""#));
}

#[test]
fn test_multiple_blocks_fail_with_diagnostics() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// script\n# a = 1\n# ///\n\n# /// script\n# b = 2\n# ///\n",
    );

    scriptmeta()
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "multiple 'script' metadata blocks found (2)",
        ))
        .stderr(predicate::str::contains("# a = 1"))
        .stderr(predicate::str::contains("# b = 2"));
}

#[test]
fn test_malformed_toml_fails_with_parser_message() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// script\n# not valid = = toml\n# ///\n",
    );

    scriptmeta()
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid TOML in 'script' metadata block",
        ));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.py");

    scriptmeta()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_unterminated_block_is_absent() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "script.py",
        "# /// script\n# a = 1\n\nprint('no closing marker')\n",
    );

    scriptmeta()
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("No metadata found."));
}
