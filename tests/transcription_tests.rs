use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use clerk::config::Settings;
use clerk::transcription::{SpeechModel, TranscribeOptions, TranscriptClient};

const API_KEY: &str = "aai-test-key";

fn settings_for(server_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.transcription.api_key = API_KEY.to_string();
    settings.transcription.endpoint = server_url.to_string();
    settings
}

fn fast_client(server_url: &str) -> TranscriptClient {
    TranscriptClient::from_settings(&settings_for(server_url))
        .expect("client construction should succeed")
        .with_poll_interval(Duration::from_millis(20))
}

#[tokio::test]
async fn completed_job_returns_transcript_text() {
    let mut server = mockito::Server::new_async().await;

    let upload = server
        .mock("POST", "/v2/upload")
        .match_header("authorization", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"upload_url": "https://cdn.example/upload/1"}"#)
        .create_async()
        .await;

    let submit = server
        .mock("POST", "/v2/transcript")
        .match_header("authorization", API_KEY)
        .match_body(Matcher::PartialJson(json!({
            "audio_url": "https://cdn.example/upload/1",
            "speech_model": "universal",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "job-1", "status": "queued"}"#)
        .create_async()
        .await;

    let poll = server
        .mock("GET", "/v2/transcript/job-1")
        .match_header("authorization", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "completed", "text": "Hello world"}"#)
        .create_async()
        .await;

    let client = fast_client(&server.url());
    let text = client
        .transcribe(b"fake audio bytes", &TranscribeOptions::default())
        .await
        .expect("transcription should succeed");

    assert_eq!(text, "Hello world");
    upload.assert_async().await;
    submit.assert_async().await;
    poll.assert_async().await;
}

#[tokio::test]
async fn job_error_fails_with_provider_message() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/v2/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"upload_url": "https://cdn.example/upload/2"}"#)
        .create_async()
        .await;

    server
        .mock("POST", "/v2/transcript")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "job-2", "status": "queued"}"#)
        .create_async()
        .await;

    server
        .mock("GET", "/v2/transcript/job-2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "error", "error": "audio duration too short"}"#)
        .create_async()
        .await;

    let client = fast_client(&server.url());
    let err = client
        .transcribe(b"fake audio bytes", &TranscribeOptions::default())
        .await
        .expect_err("provider-reported error should fail the call");

    let message = err.to_string();
    assert!(
        message.contains("audio duration too short"),
        "error should carry the provider message, got: {message}"
    );
    assert!(message.contains("Transcription failed"));
}

#[tokio::test]
async fn keeps_polling_while_job_is_processing() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/v2/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"upload_url": "https://cdn.example/upload/3"}"#)
        .create_async()
        .await;

    server
        .mock("POST", "/v2/transcript")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "job-3", "status": "queued"}"#)
        .create_async()
        .await;

    // Never reaches a terminal state; the client must keep polling
    let poll = server
        .mock("GET", "/v2/transcript/job-3")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "processing"}"#)
        .expect_at_least(2)
        .create_async()
        .await;

    let client = fast_client(&server.url());
    let opts = TranscribeOptions::default();
    let transcribe = client.transcribe(b"fake audio bytes", &opts);

    tokio::select! {
        _ = tokio::time::sleep(Duration::from_millis(400)) => {}
        result = transcribe => {
            panic!("transcribe returned while the job was still processing: {result:?}");
        }
    }

    poll.assert_async().await;
}

#[tokio::test]
async fn language_override_is_submitted() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/v2/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"upload_url": "https://cdn.example/upload/4"}"#)
        .create_async()
        .await;

    let submit = server
        .mock("POST", "/v2/transcript")
        .match_body(Matcher::PartialJson(json!({
            "speech_model": "nano",
            "language_code": "vi",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "job-4", "status": "queued"}"#)
        .create_async()
        .await;

    server
        .mock("GET", "/v2/transcript/job-4")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "completed", "text": "xin chào"}"#)
        .create_async()
        .await;

    let client = fast_client(&server.url());
    let options = TranscribeOptions::new(SpeechModel::Nano, Some("vi".to_string()));
    let text = client
        .transcribe(b"fake audio bytes", &options)
        .await
        .expect("transcription should succeed");

    assert_eq!(text, "xin chào");
    submit.assert_async().await;
}

#[tokio::test]
async fn upload_failure_propagates() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/v2/upload")
        .with_status(500)
        .create_async()
        .await;

    let client = fast_client(&server.url());
    let err = client
        .transcribe(b"fake audio bytes", &TranscribeOptions::default())
        .await
        .expect_err("upload failure should abort the pipeline");

    let message = err.to_string();
    assert!(
        message.contains("Transcription request failed"),
        "expected a transport error, got: {message}"
    );
}
