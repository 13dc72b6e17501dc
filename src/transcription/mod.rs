//! Transcription module for clerk
//!
//! Speech-to-text through a provider with an asynchronous job protocol:
//! upload the audio, submit a job referencing it, poll until terminal.

mod client;

pub use client::{TranscriptClient, TranscriptionError};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Provider speech model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SpeechModel {
    /// Best quality
    #[default]
    #[serde(rename = "universal")]
    #[value(name = "universal")]
    Universal,

    /// Balanced
    #[serde(rename = "whisper-1")]
    #[value(name = "whisper-1")]
    Whisper1,

    /// Fastest
    #[serde(rename = "nano")]
    #[value(name = "nano")]
    Nano,
}

impl SpeechModel {
    /// Name the provider expects on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechModel::Universal => "universal",
            SpeechModel::Whisper1 => "whisper-1",
            SpeechModel::Nano => "nano",
        }
    }

    /// Human-readable label for selection lists
    pub fn label(&self) -> &'static str {
        match self {
            SpeechModel::Universal => "Universal (Best Quality)",
            SpeechModel::Whisper1 => "Whisper-1 (Balanced)",
            SpeechModel::Nano => "Nano (Fastest)",
        }
    }
}

impl std::fmt::Display for SpeechModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run transcription options
#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    /// Speech model to run the job with
    pub speech_model: SpeechModel,

    /// Language code override (None = provider auto-detect)
    pub language_code: Option<String>,
}

impl TranscribeOptions {
    pub fn new(speech_model: SpeechModel, language_code: Option<String>) -> Self {
        Self {
            speech_model,
            language_code,
        }
    }
}
