//! scribe - Offline audio transcription using Whisper
//!
//! Entry point for the scribe CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scribe::cli::{Cli, Commands};
use scribe::config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            scribe::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Transcribe {
                    directory,
                    model,
                    language,
                    output,
                } => {
                    scribe::cli::commands::transcribe(&settings, &directory, model, language, output)?;
                }
                Commands::Doctor { json } => {
                    scribe::cli::commands::run_doctor(&settings, json)?;
                }
                Commands::Config(config_cmd) => {
                    scribe::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
