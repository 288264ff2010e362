//! End-to-end tests for the `enquete-intake` binary using the in-memory store.

use std::path::Path;
use std::process::{Command, Output};

use cap_std::{ambient_authority, fs::Dir};
use rstest::rstest;
use serde_json::{Value, json};
use tempfile::TempDir;

fn run_intake(dir: &Path, envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_enquete-intake"));
    command
        .current_dir(dir)
        .env_remove("ENQUETE_SUBMISSIONS_PATH")
        .env_remove("ENQUETE_LOCALE")
        .env_remove("ENQUETE_DATABASE_URL")
        .env("RUST_LOG", "off");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("spawn enquete-intake")
}

fn write_submissions(dir: &TempDir, submissions: &Value) -> String {
    let body = serde_json::to_vec(submissions).expect("encode submissions");
    let handle = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open temp dir");
    handle
        .write("submissions.json", body)
        .expect("write submissions");
    dir.path()
        .join("submissions.json")
        .to_string_lossy()
        .into_owned()
}

fn report_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("report line is json"))
        .collect()
}

#[rstest]
fn reports_each_submission_in_english() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_submissions(
        &dir,
        &json!([
            {
                "name": "田中 太郎",
                "mail": "taro.tanaka@example.com",
                "age": 25,
                "food_id": 2,
                "score": 3,
                "present_id": 1
            },
            {"mail": "taro.tanaka"}
        ]),
    );

    let output = run_intake(
        dir.path(),
        &[("ENQUETE_SUBMISSIONS_PATH", &path), ("ENQUETE_LOCALE", "en")],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let lines = report_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], json!({"status": "saved", "index": 0, "id": 1}));
    assert_eq!(lines[1]["status"], "rejected");
    assert_eq!(lines[1]["violations"]["mail"], json!(["invalid"]));
    assert_eq!(lines[1]["violations"]["name"], json!(["blank"]));
    let messages = lines[1]["messages"]
        .as_array()
        .expect("messages array");
    assert!(messages.contains(&json!("Name can't be blank")));
    assert!(messages.contains(&json!("Mail address is invalid")));
}

#[rstest]
fn japanese_is_the_default_locale() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_submissions(
        &dir,
        &json!([{"mail": "hanako@example.com", "age": 30, "food_id": 1}]),
    );

    let output = run_intake(dir.path(), &[("ENQUETE_SUBMISSIONS_PATH", &path)]);

    assert!(output.status.success());
    let lines = report_lines(&output);
    assert_eq!(lines[0]["messages"], json!(["お名前を入力してください"]));
}

#[rstest]
fn missing_submissions_path_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let output = run_intake(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("submissions path missing"));
}

#[rstest]
fn unknown_locale_fails_before_saving() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_submissions(&dir, &json!([{}]));

    let output = run_intake(
        dir.path(),
        &[("ENQUETE_SUBMISSIONS_PATH", &path), ("ENQUETE_LOCALE", "fr")],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fr"));
}
