//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::audio::{self, AudioSource};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::pipeline;
use crate::transcription::{SpeechModel, TranscribeOptions};

/// Run the full pipeline for one audio file and print the results.
pub async fn run_pipeline(
    settings: &Settings,
    file: PathBuf,
    model: Option<SpeechModel>,
    language: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    if !audio::is_supported_file(&file) {
        anyhow::bail!(
            "Unsupported audio format: {}. Supported formats: mp3, wav, m4a",
            file.display()
        );
    }

    let options = resolve_options(settings, model, language);
    let source = AudioSource::File(file);

    let result = pipeline::run(
        settings,
        &source,
        &options,
        Box::new(|stage| tracing::info!("{}...", stage.label())),
    )
    .await?;

    println!("Transcript");
    println!("----------");
    println!("{}", result.transcript);
    println!();

    match output {
        Some(path) => {
            std::fs::write(&path, &result.minutes)
                .with_context(|| format!("Failed to write minutes to {}", path.display()))?;
            println!("Minutes written to: {}", path.display());
        }
        None => {
            println!("Meeting Minutes");
            println!("---------------");
            println!("{}", result.minutes);
        }
    }

    Ok(())
}

/// Fold CLI overrides into the configured defaults.
pub fn resolve_options(
    settings: &Settings,
    model: Option<SpeechModel>,
    language: Option<String>,
) -> TranscribeOptions {
    let speech_model = model.unwrap_or(settings.transcription.speech_model);

    let language_code = language
        .or_else(|| {
            let configured = settings.transcription.language.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
        .filter(|code| !code.trim().is_empty());

    TranscribeOptions::new(speech_model, language_code)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
