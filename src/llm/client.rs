use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::perplexity::PerplexityClient;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub transcript: &'a str,
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Build a summarization provider from runtime settings.
///
/// Fails when no credential is configured; callers that want the graceful
/// degradation path use [`summarize_transcript`] instead.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn SummaryProvider>> {
    Ok(Box::new(PerplexityClient::from_settings(settings)?))
}

/// Summarize a transcript into meeting minutes, falling back to the raw
/// transcript on any failure.
///
/// Summarization is best-effort: a missing credential, a transport error, a
/// non-success status, or an unparseable response all degrade to the input
/// text. Nothing propagates past this function.
pub async fn summarize_transcript(settings: &Settings, transcript: &str) -> String {
    if !settings.summarization_enabled() {
        tracing::warn!("No summarization API key configured. Returning raw transcript.");
        return transcript.to_string();
    }

    let provider = match build_provider(settings) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::warn!("Could not build summarization provider: {e:#}");
            return transcript.to_string();
        }
    };

    match provider.summarize(SummaryRequest { transcript }).await {
        Ok(minutes) => {
            tracing::info!("Summarization completed");
            minutes
        }
        Err(e) => {
            tracing::warn!("Summarization failed: {e:#}. Returning raw transcript.");
            transcript.to_string()
        }
    }
}
