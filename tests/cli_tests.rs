mod common;

use common::{run_clerk, TestEnv};

#[test]
fn clerk_help_shows_usage() {
    let output = run_clerk(&["--help"]);
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
    assert!(stdout.contains("run"));
    assert!(stdout.contains("tui"));
}

#[test]
fn clerk_version_shows_version() {
    let output = run_clerk(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("clerk "));
}

#[test]
fn run_help_documents_model_choices() {
    let output = run_clerk(&["run", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("universal"));
    assert!(stdout.contains("whisper-1"));
    assert!(stdout.contains("nano"));
    assert!(stdout.contains("--language"));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_clerk(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("clerk"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_prints_sections() {
    let output = run_clerk(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[transcription]"));
    assert!(stdout.contains("[summarization]"));
    assert!(stdout.contains("poll_interval_secs = 3"));
}

#[test]
fn config_init_then_show_round_trips() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    // A second init without --force refuses to overwrite
    let output = env.run(&["config", "init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already exists"),
        "expected overwrite refusal, got:\n{}",
        stderr
    );

    let output = env.run(&["config", "init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn config_file_settings_are_loaded() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[transcription]
language = "ja"
poll_interval_secs = 5
"#,
    );

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("language = \"ja\""));
    assert!(stdout.contains("poll_interval_secs = 5"));
}
