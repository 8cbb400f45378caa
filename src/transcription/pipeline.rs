//! Transcription pipeline orchestration

use std::path::PathBuf;
use thiserror::Error;

use crate::transcription::types::{TranscriptionRequest, TranscriptionResult};
use crate::transcription::Recognizer;

/// Terminal error kinds for a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decoder unavailable: {0}")]
    DecoderUnavailable(String),

    #[error("audio file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("transcription failed ({kind}): {message}")]
    TranscriptionFailed { kind: &'static str, message: String },
}

/// Runs one transcription request against a recognizer.
pub struct TranscriptionPipeline<R> {
    recognizer: R,
}

impl<R: Recognizer> TranscriptionPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Run one transcription request.
    ///
    /// Returns `Err(InputNotFound)` when the audio file has vanished
    /// since discovery. Any recognizer failure is logged and collapsed
    /// into `Ok(None)` so the caller skips the report instead of
    /// crashing.
    pub fn run_transcription(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Option<TranscriptionResult>, PipelineError> {
        if !request.audio_path.exists() {
            return Err(PipelineError::InputNotFound(request.audio_path.clone()));
        }

        tracing::info!("Transcribing: {}", request.audio_path.display());

        match self.recognizer.transcribe(request) {
            Ok(raw) => Ok(Some(TranscriptionResult::from_raw(raw))),
            Err(err) => {
                let failure = PipelineError::TranscriptionFailed {
                    kind: err.kind(),
                    message: err.to_string(),
                };
                tracing::error!("{failure}");
                Ok(None)
            }
        }
    }
}
