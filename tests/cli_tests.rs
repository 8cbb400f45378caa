mod common;

use common::run_scribe;

#[test]
fn scribe_help_shows_usage() {
    let output = run_scribe(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("transcribe"));
}

#[test]
fn scribe_version_shows_version() {
    let output = run_scribe(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("scribe "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_scribe(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("scribe"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_scribe(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[whisper]"));
    assert!(stdout.contains("model"));
    assert!(stdout.contains("[decoder]"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_scribe(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}
