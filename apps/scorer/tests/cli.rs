use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const RESULTS_HEADER: &str = "report,mood_score,mood_justification,anxiety_score,anxiety_justification,depression_score,depression_justification,suicidality_score,suicidality_justification";

/// Runs the binary inside `dir` with no API key and no stray `.env`.
fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scorer").unwrap();
    cmd.current_dir(dir)
        .env_remove("CEREBRAS_API_KEY")
        .env_remove("REPLY_FORMAT")
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn validate_trims_fields() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("output")).unwrap();
    fs::write(
        tmp.path().join("output/results.csv"),
        format!(
            "{RESULTS_HEADER}\n\"  Pt reports poor sleep.  \", 7 ,Low energy. ,3,Mild worry.,,Not provided,,Invalid response format\n"
        ),
    )
    .unwrap();

    cmd(tmp.path()).arg("validate").assert().success();

    let out = fs::read_to_string(tmp.path().join("output/parsed_results.csv")).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(RESULTS_HEADER));
    assert_eq!(
        lines.next(),
        Some("Pt reports poor sleep.,7,Low energy.,3,Mild worry.,,Not provided,,Invalid response format")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn validate_missing_column_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("results.csv"),
        "report,mood_score,mood_justification\nnote,1,ok\n",
    )
    .unwrap();

    cmd(tmp.path())
        .args(["validate", "--input", "results.csv", "--output", "parsed.csv"])
        .assert()
        .failure()
        .stderr(contains("suicidality_score"))
        .stderr(contains("anxiety_justification"));

    assert!(!tmp.path().join("parsed.csv").exists());
}

#[test]
fn preprocess_txt_note() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("admission_notes")).unwrap();
    fs::write(
        tmp.path().join("admission_notes/patient_notes_1.txt"),
        "42yo presenting with low mood.\nReports passive SI.\n",
    )
    .unwrap();

    cmd(tmp.path())
        .args(["preprocess", "--reply-format", "labeled-text"])
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("output/formatted_prompts.csv")).unwrap();
    assert!(out.starts_with("report,prompt\n"));
    assert!(out.contains("History: 42yo presenting with low mood. Reports passive SI."));
    assert!(out.contains("Mood: Severity score - X. Justification: ..."));
}

#[test]
fn preprocess_rejects_unknown_extension() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.md"), "# note").unwrap();

    cmd(tmp.path())
        .args(["preprocess", "--input", "notes.md"])
        .assert()
        .failure()
        .stderr(contains("Unsupported input format"));
}

#[test]
fn infer_requires_api_key() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prompts.csv"), "report,prompt\na,b\n").unwrap();

    cmd(tmp.path())
        .args(["infer", "--input", "prompts.csv", "--output", "results.csv"])
        .assert()
        .failure()
        .stderr(contains("CEREBRAS_API_KEY"));

    assert!(!tmp.path().join("results.csv").exists());
}

#[test]
fn run_checks_api_key_before_any_work() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "note").unwrap();

    cmd(tmp.path())
        .args(["run", "--input", "notes.txt", "--output-dir", "out"])
        .assert()
        .failure()
        .stderr(contains("CEREBRAS_API_KEY"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn invalid_reply_format_env_is_reported() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .env("REPLY_FORMAT", "xml")
        .arg("validate")
        .assert()
        .failure()
        .stderr(contains("REPLY_FORMAT"));
}
