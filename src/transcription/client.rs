//! Transcription provider client
//!
//! Three-step job protocol: POST the raw bytes to /v2/upload, POST a job
//! referencing the returned asset URL to /v2/transcript, then GET the job
//! status until it reaches a terminal state.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Settings;
use crate::transcription::TranscribeOptions;

const DEFAULT_ENDPOINT: &str = "https://api.assemblyai.com";

/// Errors from the transcription protocol.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Transcription API key is missing. Set transcription.api_key in config or ASSEMBLYAI_API_KEY.")]
    MissingApiKey,

    #[error("Transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transcription failed: {0}")]
    JobFailed(String),

    #[error("Unexpected transcription response: {0}")]
    MalformedResponse(String),
}

/// Client for the asynchronous transcription job protocol.
pub struct TranscriptClient {
    http: Client,
    api_key: String,
    endpoint: String,
    poll_interval: Duration,
}

impl TranscriptClient {
    /// Build a client from runtime settings.
    ///
    /// The HTTP client carries no request timeout: job polling is unbounded
    /// and a status request queued behind a slow provider must not be killed
    /// locally.
    pub fn from_settings(settings: &Settings) -> Result<Self, TranscriptionError> {
        let api_key = settings.transcription.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(TranscriptionError::MissingApiKey);
        }

        let endpoint = if settings.transcription.endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            settings
                .transcription
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::new(),
            api_key,
            endpoint,
            poll_interval: Duration::from_secs(settings.transcription.poll_interval_secs),
        })
    }

    /// Override the poll interval (tests shorten it).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Transcribe raw audio bytes to text.
    ///
    /// Runs the full protocol. Transport failures and non-2xx responses at
    /// any step propagate; a provider-reported job error becomes
    /// [`TranscriptionError::JobFailed`] carrying the provider's message.
    pub async fn transcribe(
        &self,
        audio: &[u8],
        options: &TranscribeOptions,
    ) -> Result<String, TranscriptionError> {
        let audio_url = self.upload(audio).await?;
        let job_id = self.submit(&audio_url, options).await?;
        self.poll(&job_id).await
    }

    /// Step 1: upload the audio, returning the provider's asset URL.
    async fn upload(&self, audio: &[u8]) -> Result<String, TranscriptionError> {
        tracing::info!("Uploading audio file ({} bytes)...", audio.len());

        let response: UploadResponse = self
            .http
            .post(format!("{}/v2/upload", self.endpoint))
            .header(AUTHORIZATION, self.api_key.as_str())
            .body(audio.to_vec())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.upload_url.is_empty() {
            return Err(TranscriptionError::MalformedResponse(
                "upload response carried no upload_url".to_string(),
            ));
        }

        tracing::info!("Audio file uploaded");
        Ok(response.upload_url)
    }

    /// Step 2: submit a transcription job, returning its id.
    async fn submit(
        &self,
        audio_url: &str,
        options: &TranscribeOptions,
    ) -> Result<String, TranscriptionError> {
        tracing::info!(
            "Submitting transcription job (model: {})...",
            options.speech_model
        );

        let body = SubmitJobRequest {
            audio_url,
            speech_model: options.speech_model.as_str(),
            language_code: options.language_code.as_deref(),
        };

        let response: SubmitJobResponse = self
            .http
            .post(format!("{}/v2/transcript", self.endpoint))
            .header(AUTHORIZATION, self.api_key.as_str())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.id.is_empty() {
            return Err(TranscriptionError::MalformedResponse(
                "job submission response carried no id".to_string(),
            ));
        }

        Ok(response.id)
    }

    /// Step 3: poll the job until it completes or errors.
    ///
    /// Polls at a fixed interval with no timeout and no attempt cap; only a
    /// terminal status or a transport failure ends the loop.
    async fn poll(&self, job_id: &str) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/transcript/{}", self.endpoint, job_id);
        tracing::info!("Polling transcription job {}...", job_id);

        loop {
            let job: JobStatusResponse = self
                .http
                .get(&url)
                .header(AUTHORIZATION, self.api_key.as_str())
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            match job.status {
                JobStatus::Completed => {
                    tracing::info!("Transcription completed");
                    return job.text.ok_or_else(|| {
                        TranscriptionError::MalformedResponse(
                            "completed job carried no text".to_string(),
                        )
                    });
                }
                JobStatus::Error => {
                    let message = job
                        .error
                        .unwrap_or_else(|| "Unknown error".to_string());
                    tracing::error!("Transcription job failed: {}", message);
                    return Err(TranscriptionError::JobFailed(message));
                }
                JobStatus::Queued | JobStatus::Processing | JobStatus::Other => {
                    tracing::debug!("Transcription in progress...");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct SubmitJobRequest<'a> {
    audio_url: &'a str,
    speech_model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SubmitJobResponse {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct JobStatusResponse {
    status: JobStatus,
    text: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
    // Anything unrecognized keeps the poll loop going
    #[serde(other)]
    Other,
}
