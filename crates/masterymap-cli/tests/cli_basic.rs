//! Basic CLI E2E tests.
//!
//! Tests invoke the built `masterymap` binary with a throwaway `--config`
//! path and verify its outputs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn demo(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Run a CLI command against the config file in `dir`; returns (code, stdout, stderr).
fn run_cli(dir: &TempDir, args: &[&str]) -> (i32, String, String) {
    let config: PathBuf = dir.path().join("config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_masterymap"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(dir, args);
    assert_eq!(code, 0, "CLI failed for {args:?}: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_catalog_grades() {
    let dir = TempDir::new().unwrap();
    let grades = run_json(&dir, &["catalog", "grades", "--json"]);

    let grades = grades.as_array().unwrap();
    assert_eq!(grades.len(), 12);
    assert_eq!(grades[0], "Grade 1");
    assert_eq!(grades[11], "Grade 12");
}

#[test]
fn test_catalog_subjects() {
    let dir = TempDir::new().unwrap();
    let subjects = run_json(&dir, &["catalog", "subjects", "--grade", "9", "--json"]);

    assert_eq!(
        subjects,
        serde_json::json!(["Math", "Physics", "Chemistry", "English", "History", "Politics"])
    );
}

#[test]
fn test_catalog_points() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        &dir,
        &["catalog", "points", "--grade", "Grade 10", "--subject", "physics"],
    );

    assert_eq!(code, 0);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["Mechanics / Kinematics", "Mechanics / Newton's Laws"]);
}

#[test]
fn test_catalog_unknown_grade_rejected() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&dir, &["catalog", "subjects", "--grade", "13"]);
    assert_ne!(code, 0);
}

#[test]
fn test_submit_reports_each_event() {
    let dir = TempDir::new().unwrap();
    let output = run_json(&dir, &["submit", "--events", &demo("assessments.json"), "--json"]);

    let outcomes: Vec<&str> = output["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["outcome"].as_str().unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec!["accepted", "accepted", "accepted", "ignored-stale", "rejected-invalid", "accepted"]
    );
    assert_eq!(output["results"][1]["previousScore"], 55);
    assert_eq!(output["summary"]["accepted"], 4);
    assert_eq!(output["summary"]["ignoredStale"], 1);
    assert_eq!(output["summary"]["rejectedInvalid"], 1);
    assert_eq!(output["events"].as_array().unwrap().len(), 4);
}

#[test]
fn test_submit_text_summary() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["submit", "--events", &demo("assessments.json")]);

    assert_eq!(code, 0);
    assert!(stdout.contains("ignored-stale"));
    assert!(stdout.contains("(was 55)"));
    assert!(stdout.contains("4 accepted, 1 ignored-stale, 1 rejected-invalid"));
}

#[test]
fn test_submit_requires_input() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&dir, &["submit"]);
    assert_ne!(code, 0);
}

#[test]
fn test_submit_analysis_requires_grade() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&dir, &["submit", "--analysis", &demo("analysis.json")]);
    assert_ne!(code, 0);
}

#[test]
fn test_query_heatmap_json() {
    let dir = TempDir::new().unwrap();
    let output = run_json(
        &dir,
        &[
            "query",
            "--grade",
            "Grade 9",
            "--events",
            &demo("assessments.json"),
            "--at",
            "2026-03-09T16:00:00Z",
            "--json",
        ],
    );

    let math = output["subjects"]["Math"].as_array().unwrap();
    assert_eq!(math.len(), 2);
    assert_eq!(math[0]["key"]["subTopic"], "Quadratic Equations");
    assert_eq!(math[0]["rawScore"], 92);
    assert_eq!(math[0]["status"], "mastered");
    assert_eq!(math[1]["status"], "review");
    assert_eq!(output["subjects"]["Physics"][0]["status"], "critical");
    assert_eq!(output["summary"]["total"], 3);
}

#[test]
fn test_query_subject_and_search() {
    let dir = TempDir::new().unwrap();
    let output = run_json(
        &dir,
        &[
            "query",
            "--grade",
            "9",
            "--subject",
            "Math",
            "--search",
            "CIRC",
            "--events",
            &demo("assessments.json"),
            "--at",
            "2026-03-09T16:00:00Z",
            "--json",
        ],
    );

    let subjects = output["subjects"].as_object().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects["Math"].as_array().unwrap().len(), 1);
    assert_eq!(subjects["Math"][0]["key"]["subTopic"], "Circles");
}

#[test]
fn test_query_applies_decay() {
    let dir = TempDir::new().unwrap();
    let output = run_json(
        &dir,
        &[
            "query",
            "--grade",
            "9",
            "--subject",
            "Math",
            "--events",
            &demo("assessments.json"),
            "--at",
            "2026-04-18T16:00:00Z",
            "--json",
        ],
    );

    // 40 days at the default 0.1/day
    let quadratic = &output["subjects"]["Math"][0];
    assert_eq!(quadratic["rawScore"], 92);
    assert_eq!(quadratic["effectiveScore"], 88.0);
}

#[test]
fn test_query_decay_off_via_config() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["config", "set", "decay.mode", "off"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let output = run_json(
        &dir,
        &[
            "query",
            "--grade",
            "9",
            "--events",
            &demo("assessments.json"),
            "--at",
            "2027-03-09T16:00:00Z",
            "--json",
        ],
    );
    assert_eq!(output["subjects"]["Math"][0]["effectiveScore"], 92.0);
}

#[test]
fn test_query_with_analysis_grouped() {
    let dir = TempDir::new().unwrap();
    let output = run_json(
        &dir,
        &[
            "query",
            "--grade",
            "9",
            "--subject",
            "Chemistry",
            "--analysis",
            &demo("analysis.json"),
            "--json",
            "--group",
        ],
    );

    let chemistry = output["subjects"]["Chemistry"].as_object().unwrap();
    let topics: Vec<&String> = chemistry.keys().collect();
    assert_eq!(topics.len(), 2);
    assert_eq!(chemistry["Reactions"][0]["status"], "critical");
    assert_eq!(chemistry["Matter"][0]["status"], "mastered");
}

#[test]
fn test_query_text_output() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        &dir,
        &[
            "query",
            "--grade",
            "9",
            "--events",
            &demo("assessments.json"),
            "--at",
            "2026-03-09T16:00:00Z",
        ],
    );

    assert_eq!(code, 0);
    assert!(stdout.contains("Grade 9 · Math"));
    assert!(stdout.contains("█ Algebra / Quadratic Equations"));
    assert!(stdout.contains("░ Energy / Work and Power"));
    assert!(stdout.contains("1 not assessed"));
}

#[test]
fn test_query_nothing_assessed() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["query", "--grade", "3"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No assessed subtopics match."));
}

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(&dir, &["config", "get", "decay.default_rate_per_day"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0.1");

    let (code, _, _) = run_cli(&dir, &["config", "set", "decay.default_rate_per_day", "0.5"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&dir, &["config", "get", "decay.default_rate_per_day"]);
    assert_eq!(stdout.trim(), "0.5");

    let (code, _, stderr) = run_cli(&dir, &["config", "set", "decay.default_rate_per_day", "-1"]);
    assert_ne!(code, 0);
    assert!(stderr.starts_with("error:"));

    let (code, _, _) = run_cli(&dir, &["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_path_and_show() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(&dir, &["config", "path"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), dir.path().join("config.toml").to_string_lossy());

    let (code, stdout, _) = run_cli(&dir, &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[decay]"));
    assert!(stdout.contains("mode = \"linear\""));
}

#[test]
fn test_extra_catalog_from_config() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&dir, &["config", "set", "catalog.path", &demo("extra_catalog.toml")]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(&dir, &["catalog", "points", "--grade", "12", "--subject", "Physics"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Mechanics / Derivation of Motion Equations"));
}
