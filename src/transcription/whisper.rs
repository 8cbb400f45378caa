//! Whisper transcription using whisper-rs

use std::path::{Path, PathBuf};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::decoder::FfmpegDecoder;
use crate::transcription::types::{RawTranscription, Segment, TranscriptionRequest};
use crate::transcription::{Recognizer, RecognizerError};

/// Whisper-based recognizer
///
/// Loads the requested model per run; model load is the slow part and
/// there is exactly one request per process.
pub struct WhisperRecognizer {
    models_dir: PathBuf,
    decoder: FfmpegDecoder,
}

impl WhisperRecognizer {
    pub fn new(models_dir: PathBuf, decoder: FfmpegDecoder) -> Self {
        Self { models_dir, decoder }
    }

    fn load_model(&self, request: &TranscriptionRequest) -> Result<WhisperContext, RecognizerError> {
        let model_path = self.models_dir.join(request.model_size.model_file_name());

        if !model_path.exists() {
            return Err(RecognizerError::ModelNotFound { path: model_path });
        }

        tracing::info!("Loading Whisper model: {}", request.model_size);

        WhisperContext::new_with_params(
            &model_path.to_string_lossy(),
            WhisperContextParameters::default(),
        )
        .map_err(RecognizerError::ModelLoad)
    }
}

impl Recognizer for WhisperRecognizer {
    fn transcribe(&self, request: &TranscriptionRequest) -> Result<RawTranscription, RecognizerError> {
        let ctx = self.load_model(request)?;

        // Normalize the input to 16kHz mono WAV before loading samples.
        let workdir = tempfile::tempdir()?;
        let wav_path = self.decoder.decode_to_wav(&request.audio_path, workdir.path())?;
        let samples = load_audio(&wav_path)?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // Configure parameters
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(false);

        // Forced language when a hint is present; otherwise the
        // parameter stays unset and Whisper auto-detects.
        if let Some(ref lang) = request.language_hint {
            params.set_language(Some(lang));
        }

        // Run inference
        let mut state = ctx.create_state().map_err(RecognizerError::Inference)?;
        state
            .full(params, &samples)
            .map_err(RecognizerError::Inference)?;

        let language = state
            .full_lang_id_from_state()
            .ok()
            .and_then(whisper_rs::get_lang_str)
            .map(|lang| lang.to_string());

        // Extract segments
        let num_segments = state.full_n_segments().map_err(RecognizerError::Inference)?;
        let mut segments = Vec::new();

        for i in 0..num_segments {
            let start = state
                .full_get_segment_t0(i)
                .map_err(RecognizerError::Inference)? as f64
                / 100.0; // Convert from centiseconds

            let end = state
                .full_get_segment_t1(i)
                .map_err(RecognizerError::Inference)? as f64
                / 100.0;

            let text = state
                .full_get_segment_text(i)
                .map_err(RecognizerError::Inference)?;

            // Skip empty or whitespace-only segments
            let text = text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            segments.push(Segment {
                index: segments.len(),
                start,
                end,
                text,
            });
        }

        let text = segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!("Transcription complete: {} segments", segments.len());

        Ok(RawTranscription {
            text,
            language,
            segments,
        })
    }
}

/// Load audio from a WAV file and convert to f32 samples at 16kHz mono
fn load_audio(path: &Path) -> Result<Vec<f32>, RecognizerError> {
    let reader = hound::WavReader::open(path)?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    tracing::debug!(
        "Loading audio: {} Hz, {} channels, {:?}",
        sample_rate,
        channels,
        spec.sample_format
    );

    // Read samples based on format
    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 32768.0)
            .collect(),
        (hound::SampleFormat::Int, 32) => reader
            .into_samples::<i32>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 2147483648.0)
            .collect(),
        (hound::SampleFormat::Float, 32) => {
            reader.into_samples::<f32>().filter_map(|s| s.ok()).collect()
        }
        _ => {
            return Err(RecognizerError::UnsupportedFormat(format!(
                "{:?} {}bit",
                spec.sample_format, spec.bits_per_sample
            )))
        }
    };

    // Convert to mono if stereo
    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    // Resample to 16kHz if needed
    let samples = if sample_rate != 16000 {
        resample(&samples, sample_rate, 16000)
    } else {
        samples
    };

    Ok(samples)
}

/// Simple linear resampling
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    let ratio = from_rate as f64 / to_rate as f64;
    let new_len = (samples.len() as f64 / ratio) as usize;
    let mut result = Vec::with_capacity(new_len);

    for i in 0..new_len {
        let src_pos = i as f64 * ratio;
        let src_idx = src_pos as usize;
        let frac = src_pos - src_idx as f64;

        let sample = if src_idx + 1 < samples.len() {
            samples[src_idx] * (1.0 - frac as f32) + samples[src_idx + 1] * frac as f32
        } else if src_idx < samples.len() {
            samples[src_idx]
        } else {
            0.0
        };

        result.push(sample);
    }

    result
}
