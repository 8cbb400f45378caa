//! Transcription module for scribe
//!
//! Handles speech-to-text using whisper-rs.

mod pipeline;
mod types;
mod whisper;

pub use pipeline::{PipelineError, TranscriptionPipeline};
pub use types::{ModelSize, RawTranscription, Segment, TranscriptionRequest, TranscriptionResult};
pub use whisper::WhisperRecognizer;

use thiserror::Error;

use crate::decoder::DecoderError;

/// The speech-recognition capability behind the pipeline.
///
/// One call covers model load and inference for a single request; the
/// pipeline treats everything behind this seam as opaque.
pub trait Recognizer {
    fn transcribe(&self, request: &TranscriptionRequest) -> Result<RawTranscription, RecognizerError>;
}

/// Errors raised by a [`Recognizer`]
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("Whisper model not found at {path}. Download a ggml model (e.g. from huggingface.co/ggerganov/whisper.cpp) into the models directory.")]
    ModelNotFound { path: std::path::PathBuf },

    #[error("failed to load Whisper model: {0}")]
    ModelLoad(#[source] whisper_rs::WhisperError),

    #[error("Whisper inference failed: {0}")]
    Inference(#[source] whisper_rs::WhisperError),

    #[error("audio decode failed: {0}")]
    Decode(#[from] DecoderError),

    #[error("failed to read decoded audio: {0}")]
    Audio(#[from] hound::Error),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RecognizerError {
    /// Short stable label used in operator-facing failure messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelNotFound { .. } | Self::ModelLoad(_) => "model-load",
            Self::Inference(_) => "inference",
            Self::Decode(_) => "decode",
            Self::Audio(_) | Self::UnsupportedFormat(_) => "audio",
            Self::Io(_) => "io",
        }
    }
}
