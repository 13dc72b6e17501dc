//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::transcription::SpeechModel;

/// clerk - meeting minutes from recorded audio
#[derive(Parser, Debug)]
#[command(name = "clerk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe and summarize an audio file
    Run {
        /// Audio file to process (mp3, wav, m4a)
        file: PathBuf,

        /// Speech model override
        #[arg(short, long, value_enum)]
        model: Option<SpeechModel>,

        /// Language code override (e.g. en, vi, ja; default auto-detect)
        #[arg(short, long)]
        language: Option<String>,

        /// Write the minutes to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive TUI
    Tui {
        /// Audio file to pre-fill in the setup screen
        file: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
