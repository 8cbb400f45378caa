mod common;

use common::{run_scribe, TestEnv};

#[test]
fn doctor_runs_and_reports_checks() {
    let output = run_scribe(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "doctor should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("scribe doctor"));
    assert!(stdout.contains("ffmpeg"));
    assert!(stdout.contains("model"));
}

#[test]
fn doctor_json_emits_parseable_report() {
    let output = run_scribe(&["doctor", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "doctor --json should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );

    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("doctor --json should emit valid JSON");
    let checks = report["checks"].as_array().expect("checks array");
    assert!(checks.iter().any(|c| c["name"] == "ffmpeg"));
    assert!(checks.iter().any(|c| c["name"] == "model"));
}

#[test]
fn doctor_flags_missing_model() {
    let env = TestEnv::new();
    let output = env.run(&["doctor", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let model_check = report["checks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "model")
        .expect("model check present");

    // The isolated test environment never has model weights installed.
    assert_eq!(model_check["status"], "missing");
}
