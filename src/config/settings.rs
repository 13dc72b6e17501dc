//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcription::SpeechModel;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Transcription provider settings
    #[serde(default)]
    pub transcription: TranscriptionSettings,

    /// Summarization provider settings
    #[serde(default)]
    pub summarization: SummarizationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSettings {
    /// API key for the transcription provider
    #[serde(default)]
    pub api_key: String,

    /// Provider base URL (empty = AssemblyAI)
    #[serde(default)]
    pub endpoint: String,

    /// Default speech model (universal, whisper-1, nano)
    #[serde(default)]
    pub speech_model: SpeechModel,

    /// Default language code (empty = auto-detect)
    #[serde(default)]
    pub language: String,

    /// Seconds between job status polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizationSettings {
    /// API key (empty = skip summarization, return raw transcript)
    #[serde(default)]
    pub api_key: String,

    /// Provider base URL (empty = Perplexity)
    #[serde(default)]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_summary_model")]
    pub model: String,

    /// Maximum completion length in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_poll_interval() -> u64 {
    3
}

fn default_summary_model() -> String {
    "sonar-pro".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
            speech_model: SpeechModel::default(),
            language: String::new(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
            model: default_summary_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            transcription: TranscriptionSettings::default(),
            summarization: SummarizationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.transcription.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("ASSEMBLYAI_API_KEY") {
                if !key.trim().is_empty() {
                    self.transcription.api_key = key;
                }
            }
        }

        if self.summarization.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("PERPLEXITY_API_KEY") {
                if !key.trim().is_empty() {
                    self.summarization.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "clerk", "clerk")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Whether a summarization credential is configured
    pub fn summarization_enabled(&self) -> bool {
        !self.summarization.api_key.trim().is_empty()
    }
}
