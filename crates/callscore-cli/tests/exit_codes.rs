//! # Binary Exit Codes
//!
//! Runs the `callscore` binary against temporary record and configuration
//! files and checks the status codes orchestration scripts rely on.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use callscore_cli::exit::{
    EXIT_MALFORMED_JSON, EXIT_RECORD_NOT_FOUND, EXIT_UNEXPECTED, EXIT_USAGE, EXIT_VALIDATION,
};

fn callscore(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_callscore"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn risk_levels_map_to_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        (r#"{"agent_id": "A1", "transcript": [{"text": "Guten Tag"}]}"#, 0),
        (r#"{"agent_id": "A1", "transcript": [{"text": "Das kostet 500 Euro"}]}"#, 1),
        (r#"{"agent_id": "A1", "transcript": ["Das kostet 100€ und ist gesetzlich geregelt"]}"#, 2),
    ];

    for (idx, (record, expected)) in cases.iter().enumerate() {
        let path = write(dir.path(), &format!("call_{idx}.json"), record);
        let out = callscore(&["score", path_str(&path)]);
        assert_eq!(out.status.code(), Some(*expected), "record {record}");

        let result: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(result["risk"], *expected);
    }
}

#[test]
fn critical_via_lowered_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let record = write(
        dir.path(),
        "call.json",
        r#"{"agent_id": "A1", "transcript": ["100€, gesetzlich geregelt"]}"#,
    );
    let config = write(
        dir.path(),
        "rules.yaml",
        "risk_thresholds:\n  LOW: 0\n  MEDIUM: 0\n  HIGH: 1\n",
    );

    let out = callscore(&["--config", path_str(&config), "score", path_str(&record)]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn failures_have_distinct_codes() {
    let dir = tempfile::tempdir().unwrap();

    let out = callscore(&["score", path_str(&dir.path().join("absent.json"))]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_RECORD_NOT_FOUND)));

    let broken = write(dir.path(), "broken.json", "{\"agent_id\": ");
    let out = callscore(&["score", path_str(&broken)]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_MALFORMED_JSON)));

    let anonymous = write(dir.path(), "anonymous.json", r#"{"transcript": []}"#);
    let out = callscore(&["score", path_str(&anonymous)]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_VALIDATION)));
    assert!(String::from_utf8_lossy(&out.stderr).contains("agent_id"));

    let out = callscore(&["score"]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_USAGE)));
}

#[test]
fn missing_config_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let record = write(
        dir.path(),
        "call.json",
        r#"{"agent_id": "A1", "transcript": [{"text": "Das kostet 500 Euro"}]}"#,
    );

    let out = callscore(&[
        "--config",
        "/nonexistent/callscore/rules.yaml",
        "score",
        path_str(&record),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("falling back"));
}

#[test]
fn config_subcommand_prints_yaml() {
    let out = callscore(&["config"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("price_keywords:"));
    assert!(stdout.contains("placeholder_bonus: -1"));
}

/// Run the binary with stdout connected to a socket whose peer is already
/// closed, so every write fails with `EPIPE`.
#[cfg(unix)]
fn callscore_with_closed_stdout(args: &[&str]) -> Output {
    use std::os::unix::io::OwnedFd;
    use std::os::unix::net::UnixStream;
    use std::process::Stdio;

    let (writer, reader) = UnixStream::pair().unwrap();
    drop(reader);

    Command::new(env!("CARGO_BIN_EXE_callscore"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(OwnedFd::from(writer)))
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
        .wait_with_output()
        .unwrap()
}

#[cfg(unix)]
#[test]
fn closed_stdout_is_an_unexpected_failure() {
    let dir = tempfile::tempdir().unwrap();
    let record = write(
        dir.path(),
        "call.json",
        r#"{"agent_id": "A1", "transcript": [{"text": "Guten Tag"}]}"#,
    );

    let out = callscore_with_closed_stdout(&["score", path_str(&record)]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_UNEXPECTED)));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to write scorecard to stdout"));
    assert!(!stderr.contains("panicked"));

    let out = callscore_with_closed_stdout(&["config"]);
    assert_eq!(out.status.code(), Some(i32::from(EXIT_UNEXPECTED)));
}
