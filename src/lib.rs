//! clerk - meeting minutes from recorded audio
//!
//! Chains a cloud transcription provider (asynchronous upload/submit/poll
//! job protocol) with a chat-completion summarizer to turn an mp3/wav/m4a
//! recording into structured meeting minutes.

pub mod audio;
pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod transcription;
pub mod tui;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "clerk";
