//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::transcription::ModelSize;

/// scribe - Offline audio transcription using Whisper
#[derive(Parser, Debug)]
#[command(name = "scribe")]
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
    /// Transcribe the first audio file found in a directory
    Transcribe {
        /// Directory to scan for audio files
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Whisper model size (overrides config)
        #[arg(short, long)]
        model: Option<ModelSize>,

        /// Force a language instead of auto-detecting (ISO code, e.g. "en")
        #[arg(short, long)]
        language: Option<String>,

        /// Report file path (defaults to whisper_transcript.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run diagnostic checks (ffmpeg, model files)
    Doctor {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
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
