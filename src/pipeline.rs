//! Pipeline orchestration: audio bytes -> transcript -> minutes
//!
//! Each run is an independent sequence of blocking calls; nothing is shared
//! between invocations and a failed run produces no artifacts.

use anyhow::Result;

use crate::audio::AudioSource;
use crate::config::Settings;
use crate::llm;
use crate::transcription::{TranscribeOptions, TranscriptClient};

/// Pipeline stage, reported before the stage starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    LoadingAudio,
    Transcribing,
    Summarizing,
}

impl PipelineStage {
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::LoadingAudio => "Loading audio",
            PipelineStage::Transcribing => "Transcribing",
            PipelineStage::Summarizing => "Summarizing",
        }
    }
}

/// Stage callback type
pub type StageCallback = Box<dyn Fn(PipelineStage) + Send + Sync>;

/// Terminal artifacts of one run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub transcript: String,
    pub minutes: String,
}

/// Run the full pipeline for one audio source.
///
/// Input and transcription failures abort the run and propagate;
/// summarization is fail-open and always yields minutes text (possibly the
/// raw transcript).
pub async fn run(
    settings: &Settings,
    source: &AudioSource,
    options: &TranscribeOptions,
    on_stage: StageCallback,
) -> Result<PipelineOutput> {
    tracing::info!("Processing {}", source.describe());

    on_stage(PipelineStage::LoadingAudio);
    let audio = source.load()?;

    on_stage(PipelineStage::Transcribing);
    let client = TranscriptClient::from_settings(settings)?;
    let transcript = client.transcribe(&audio, options).await?;

    on_stage(PipelineStage::Summarizing);
    let minutes = llm::summarize_transcript(settings, &transcript).await;

    Ok(PipelineOutput { transcript, minutes })
}
