// ABOUTME: End-to-end tests for the capelog binary's subcommands.
// ABOUTME: Each run points --dir at a temp directory and isolates the config home.

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use tempfile::TempDir;

/// Run capelog against `logs` with a config home that holds no config file.
fn run_capelog(config_home: &TempDir, logs: &Path, args: &[&str]) -> (String, String, bool) {
    let mut cmd = Command::cargo_bin("capelog").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .arg("--dir")
        .arg(logs)
        .args(args);
    let output = cmd.output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_log(dir: &Path, name: &str, content: &str, age: Duration) {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(SystemTime::now() - age)
        .unwrap();
}

#[test]
fn path_prints_log_directory() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["path"]);
    assert!(ok);
    assert_eq!(stdout.trim(), logs.path().display().to_string());
}

#[test]
fn list_json_and_size_report_log_files() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    write_log(logs.path(), "older.log", "12345", Duration::from_secs(600));
    write_log(logs.path(), "newer.log", "123", Duration::from_secs(5));

    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["list", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["newer.log", "older.log"]);

    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["size"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "8");
}

#[test]
fn clean_removes_logs_past_the_window() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    write_log(logs.path(), "stale.log", "x", Duration::from_secs(5 * 3600));
    write_log(logs.path(), "fresh.log", "x", Duration::from_secs(60));

    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["clean", "--hours", "2"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "removed 1 log file(s)");
    assert!(!logs.path().join("stale.log").exists());
    assert!(logs.path().join("fresh.log").exists());
}

#[test]
fn export_then_clear() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_log(logs.path(), "one.log", "first", Duration::ZERO);

    let dest = out.path().to_string_lossy().to_string();
    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["export", &dest]);
    assert!(ok);
    let bundle = Path::new(stdout.trim());
    assert_eq!(fs::read_to_string(bundle.join("one.log")).unwrap(), "first");

    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["clear"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "removed 1 log file(s)");
    assert!(!logs.path().join("one.log").exists());

    let (stdout, _, ok) = run_capelog(&home, logs.path(), &["export", &dest]);
    assert!(ok);
    assert_eq!(stdout.trim(), "no logs to export");
}

#[test]
fn write_records_message_in_a_new_log() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    let (stdout, stderr, ok) = run_capelog(&home, logs.path(), &["write", "hello", "cape"]);
    assert!(ok);

    let files: Vec<_> = fs::read_dir(logs.path()).unwrap().collect();
    if !capelog::Logger::is_active() {
        assert!(stderr.contains("compiled out"));
        assert!(files.is_empty());
        return;
    }

    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
    assert!(content.contains("] hello cape\n"));
    assert!(content.trim_end().ends_with("=== Log End ==="));
    assert!(stdout.contains("] hello cape"));
    assert!(!stdout.contains("=== Log End ==="));
    assert!(stderr.contains("logged to"));
}

#[test]
fn write_without_message_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let logs = tempfile::tempdir().unwrap();
    let (_, stderr, ok) = run_capelog(&home, logs.path(), &["write"]);
    assert!(!ok);
    assert!(stderr.contains("required"));
}
