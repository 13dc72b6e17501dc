//! Summarization module for clerk
//!
//! Turns a raw transcript into structured meeting minutes through a
//! chat-completion provider. Best-effort by design: every failure path
//! falls back to the raw transcript.

mod client;
mod perplexity;
mod prompts;

pub use client::{build_provider, summarize_transcript, SummaryProvider, SummaryRequest};
pub use perplexity::PerplexityClient;
