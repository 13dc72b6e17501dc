//! Audio input module for clerk
//!
//! The pipeline consumes raw audio bytes; this module owns how they are
//! obtained. No decoding or validation happens here - the transcription
//! provider accepts the container formats as-is.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extensions the front ends accept
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a"];

/// Errors reading audio input
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the audio bytes come from.
///
/// `File` is a path on disk (the CLI and TUI case); `Memory` covers callers
/// that already hold the upload in memory.
#[derive(Debug, Clone)]
pub enum AudioSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl AudioSource {
    /// Read the full byte content of the source.
    ///
    /// Errors propagate unmodified to the caller; there is no retry.
    pub fn load(&self) -> Result<Vec<u8>, AudioError> {
        match self {
            AudioSource::Memory(bytes) => {
                tracing::debug!("Using {} bytes of in-memory audio", bytes.len());
                Ok(bytes.clone())
            }
            AudioSource::File(path) => {
                tracing::info!("Reading audio from: {}", path.display());
                match std::fs::read(path) {
                    Ok(bytes) => Ok(bytes),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(AudioError::NotFound(path.clone()))
                    }
                    Err(e) => Err(AudioError::Io(e)),
                }
            }
        }
    }

    /// Short description for logs and UI labels
    pub fn describe(&self) -> String {
        match self {
            AudioSource::File(path) => path.display().to_string(),
            AudioSource::Memory(bytes) => format!("<in-memory, {} bytes>", bytes.len()),
        }
    }
}

/// Whether a path carries one of the accepted audio extensions
/// (mp3, wav, m4a; case-insensitive).
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
