//! CLI integration tests for the sqlpretty binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper: get a Command for the sqlpretty binary.
fn sqlpretty() -> Command {
    Command::cargo_bin("sqlpretty").expect("binary should exist")
}

/// Helper: create a temp directory populated with the given files.
fn setup_temp_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}

// ─── Preformatted files ───

#[test]
fn test_preformatted_file_unchanged() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT\n  1\n")]);
    sqlpretty()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unchanged"));
}

#[test]
fn test_preformatted_check_mode_passes() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT\n  1\n")]);
    sqlpretty().arg("--check").arg(dir.path()).assert().success();
}

// ─── Unformatted files ───

#[test]
fn test_unformatted_file_reformatted_in_place() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlpretty()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("reformatted"));

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT\n  1\n");
}

#[test]
fn test_unformatted_check_mode_fails_without_writing() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlpretty().arg("--check").arg(dir.path()).assert().code(1);

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT    1\n");
}

#[test]
fn test_diff_mode_prints_diff_without_writing() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlpretty()
        .arg("--diff")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("+SELECT"));

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT    1\n");
}

// ─── Stdin ───

#[test]
fn test_stdin_formats_to_stdout() {
    sqlpretty()
        .arg("-")
        .write_stdin("SELECT a FROM b")
        .assert()
        .success()
        .stdout("SELECT\n  a\nFROM\n  b\n");
}

#[test]
fn test_stdin_respects_language_flag() {
    sqlpretty()
        .args(["-", "--language", "tsql"])
        .write_stdin("SELECT [my col] FROM t")
        .assert()
        .success()
        .stdout(predicate::str::contains("[my col]"));
}

#[test]
fn test_stdin_no_uppercase() {
    sqlpretty()
        .args(["-", "--no-uppercase"])
        .write_stdin("select 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"));
}

// ─── Errors and configuration ───

#[test]
fn test_unknown_language_exits_2() {
    sqlpretty()
        .args(["-", "--language", "sqlite99"])
        .write_stdin("SELECT 1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported SQL dialect"));
}

#[test]
fn test_invalid_newline_exits_2() {
    sqlpretty()
        .args(["-", "--newline=-4"])
        .write_stdin("SELECT 1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid newline"));
}

#[test]
fn test_config_file_applies() {
    let dir = setup_temp_dir(&[
        ("sqlpretty.toml", "uppercase = false\n"),
        ("query.sql", "SELECT 1\n"),
    ]);
    sqlpretty().arg(dir.path()).assert().success();

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "select\n  1\n");
}

#[test]
fn test_unknown_config_key_exits_2() {
    let dir = setup_temp_dir(&[
        ("sqlpretty.toml", "line_len = 3\n"),
        ("query.sql", "SELECT 1\n"),
    ]);
    sqlpretty()
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config option"));
}

#[test]
fn test_exclude_pattern_skips_files() {
    let dir = setup_temp_dir(&[
        ("keep.sql", "SELECT    1\n"),
        ("skip_gen.sql", "SELECT    1\n"),
    ]);
    sqlpretty()
        .arg("--exclude")
        .arg("skip_*")
        .arg(dir.path())
        .assert()
        .success();

    let kept = fs::read_to_string(dir.path().join("keep.sql")).unwrap();
    let skipped = fs::read_to_string(dir.path().join("skip_gen.sql")).unwrap();
    assert_eq!(kept, "SELECT\n  1\n");
    assert_eq!(skipped, "SELECT    1\n");
}

#[test]
fn test_non_sql_files_ignored() {
    let dir = setup_temp_dir(&[("notes.txt", "SELECT    1\n")]);
    sqlpretty()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("0 file(s) processed"));

    let content = fs::read_to_string(dir.path().join("notes.txt")).unwrap();
    assert_eq!(content, "SELECT    1\n");
}

#[test]
fn test_lines_between_queries_flag() {
    sqlpretty()
        .args(["-", "--lines-between-queries", "2"])
        .write_stdin("SELECT 1; SELECT 2")
        .assert()
        .success()
        .stdout(predicate::str::contains(";\n\nSELECT"));
}
