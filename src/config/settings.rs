//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcription::ModelSize;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Whisper transcription settings
    #[serde(default)]
    pub whisper: WhisperSettings,

    /// External decoder (ffmpeg) settings
    #[serde(default)]
    pub decoder: DecoderSettings,

    /// Report output settings
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for model files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSettings {
    /// Whisper model to use (tiny, base, small, medium, large)
    #[serde(default)]
    pub model: ModelSize,

    /// Path to model files directory
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Language for transcription (empty = auto-detect)
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderSettings {
    /// Explicit path to the ffmpeg binary (empty = resolve from
    /// search_dir and PATH)
    #[serde(default)]
    pub ffmpeg_path: String,

    /// Extra directory to search for ffmpeg, checked before PATH
    /// (e.g. a bundled ffmpeg-*/bin directory)
    #[serde(default)]
    pub search_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// File name of the transcript report, written to the current
    /// working directory
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "scribe", "scribe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/scribe"))
}

fn default_models_dir() -> PathBuf {
    let mut dir = default_data_dir();
    dir.push("models");
    dir
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_report_file() -> PathBuf {
    PathBuf::from("whisper_transcript.txt")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            model: ModelSize::default(),
            models_dir: default_models_dir(),
            language: String::new(),
        }
    }
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: String::new(),
            search_dir: String::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            report_file: default_report_file(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            whisper: WhisperSettings::default(),
            decoder: DecoderSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(settings)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "scribe", "scribe")
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

    /// Language hint from config, with the empty string meaning
    /// auto-detect
    pub fn language_hint(&self) -> Option<String> {
        let lang = self.whisper.language.trim();
        if lang.is_empty() {
            None
        } else {
            Some(lang.to_string())
        }
    }

    /// Get the path to a whisper model file for the given size
    pub fn model_path(&self, size: ModelSize) -> PathBuf {
        self.whisper.models_dir.join(size.model_file_name())
    }
}
