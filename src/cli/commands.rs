//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::decoder::FfmpegDecoder;
use crate::discovery::discover_input;
use crate::report::{render_report, write_report};
use crate::transcription::{
    ModelSize, PipelineError, TranscriptionPipeline, TranscriptionRequest, WhisperRecognizer,
};

/// Run the transcription pipeline on the first audio file in a directory.
///
/// All four terminal outcomes (decoder unavailable, no input, input
/// vanished, transcription failed) end the run with an operator message
/// and a clean exit; a report exists iff transcription fully succeeded.
pub fn transcribe(
    settings: &Settings,
    directory: &Path,
    model: Option<ModelSize>,
    language: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    // The decoder gate comes first: abort before touching any audio file.
    let decoder = match FfmpegDecoder::resolve(&settings.decoder) {
        Ok(decoder) => decoder,
        Err(err) => {
            let failure = PipelineError::DecoderUnavailable(err.to_string());
            tracing::error!("{failure}");
            println!("{failure}");
            return Ok(());
        }
    };

    let mut candidates = discover_input(directory)?;

    if candidates.is_empty() {
        println!("No audio files found in {}", directory.display());
        return Ok(());
    }

    let names: Vec<String> = candidates
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    println!("Found audio files: {}", names.join(", "));

    // Single-shot by contract: only the first candidate in enumeration
    // order is transcribed.
    let audio_path = candidates.remove(0);
    println!("Using audio file: {}", audio_path.display());

    let request = TranscriptionRequest {
        audio_path,
        model_size: model.unwrap_or(settings.whisper.model),
        language_hint: language
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
            .or_else(|| settings.language_hint()),
    };

    let recognizer = WhisperRecognizer::new(settings.whisper.models_dir.clone(), decoder);
    let pipeline = TranscriptionPipeline::new(recognizer);

    let result = match pipeline.run_transcription(&request) {
        Ok(Some(result)) => result,
        Ok(None) => {
            println!("Transcription failed; no report written");
            return Ok(());
        }
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!(
        "Transcription successful: {} segments, language: {}",
        result.segments.len(),
        result.detected_language
    );

    let report = render_report(&request, &result);
    let report_path = output.unwrap_or_else(|| settings.output.report_file.clone());
    write_report(&report_path, &report)?;

    println!("Results saved to: {}", report_path.display());

    Ok(())
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

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    model: String,
    models_dir: String,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("scribe doctor");
    println!("model: {}", report.model);
    println!("models_dir: {}", report.models_dir);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let mut notes = Vec::new();

    let ffmpeg_check = match FfmpegDecoder::resolve(&settings.decoder) {
        Ok(decoder) => DoctorCheck {
            name: "ffmpeg",
            status: "ok",
            detail: decoder.binary().display().to_string(),
        },
        Err(err) => {
            notes.push(format!("hint: {}", err));
            DoctorCheck {
                name: "ffmpeg",
                status: "missing",
                detail: "required to decode audio input".to_string(),
            }
        }
    };

    let model_path = settings.model_path(settings.whisper.model);
    let model_check = if model_path.exists() {
        DoctorCheck {
            name: "model",
            status: "ok",
            detail: model_path.display().to_string(),
        }
    } else {
        notes.push(format!(
            "hint: download a ggml model into {} (e.g. from huggingface.co/ggerganov/whisper.cpp).",
            settings.whisper.models_dir.display()
        ));
        DoctorCheck {
            name: "model",
            status: "missing",
            detail: model_path.display().to_string(),
        }
    };

    DoctorReport {
        model: settings.whisper.model.to_string(),
        models_dir: settings.whisper.models_dir.display().to_string(),
        checks: vec![ffmpeg_check, model_check],
        notes,
    }
}
