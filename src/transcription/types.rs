//! Data types for transcription requests and results

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Whisper model size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// File name of the ggml model weights for this preset
    pub fn model_file_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }
}

impl Default for ModelSize {
    fn default() -> Self {
        Self::Base
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcription run: which file, which model, and an optional
/// forced language (`None` means auto-detect).
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio_path: PathBuf,
    pub model_size: ModelSize,
    pub language_hint: Option<String>,
}

/// A contiguous, timestamped span of recognized speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Position in the transcript, 0-based as stored
    pub index: usize,

    /// Start time in seconds from the beginning of the audio
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Recognized text
    pub text: String,
}

/// Raw output of the speech-recognition capability, before the
/// pipeline fills in fallbacks.
#[derive(Debug, Clone)]
pub struct RawTranscription {
    pub text: String,
    pub language: Option<String>,
    pub segments: Vec<Segment>,
}

/// Complete result of one transcription run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Full transcript text
    pub full_text: String,

    /// Detected (or forced) language, "Unknown" when the model
    /// reported none
    pub detected_language: String,

    /// Timed segments in chronological order
    pub segments: Vec<Segment>,
}

impl TranscriptionResult {
    pub fn from_raw(raw: RawTranscription) -> Self {
        Self {
            full_text: raw.text,
            detected_language: raw.language.unwrap_or_else(|| "Unknown".to_string()),
            segments: raw.segments,
        }
    }
}
