mod common;

use common::{run_clerk, TestEnv};

#[test]
fn run_rejects_unsupported_extension() {
    let output = run_clerk(&["run", "notes.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported audio format"),
        "expected format error, got:\n{}",
        stderr
    );
}

#[test]
fn run_reports_missing_file() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[transcription]
api_key = "aai-test-key"
"#,
    );

    let output = env.run(&["run", "/definitely/not/here/meeting.mp3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Audio file not found"),
        "expected missing file error, got:\n{}",
        stderr
    );
}

#[test]
fn run_requires_transcription_key() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let audio_path = dir.path().join("standup.wav");
    std::fs::write(&audio_path, b"RIFF....WAVEfmt ").expect("write sample audio");

    let output = run_clerk(&["run", audio_path.to_str().expect("utf-8 path")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}
