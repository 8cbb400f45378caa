//! External audio decoder (ffmpeg) resolution and invocation
//!
//! The ffmpeg binary is resolved once to a concrete path and that path
//! is handed to every subprocess invocation. The process environment is
//! never modified; a bundled ffmpeg is picked up through the
//! `[decoder]` config table instead of PATH mutation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::config::DecoderSettings;

#[cfg(windows)]
const FFMPEG_BINARY: &str = "ffmpeg.exe";
#[cfg(not(windows))]
const FFMPEG_BINARY: &str = "ffmpeg";

/// Errors from decoder resolution or invocation
#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("{0}")]
    NotFound(String),

    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ffmpeg failed on {input}: {stderr}")]
    Failed { input: String, stderr: String },
}

/// Handle to a resolved ffmpeg binary
#[derive(Debug, Clone)]
pub struct FfmpegDecoder {
    binary: PathBuf,
}

impl FfmpegDecoder {
    /// Resolve the ffmpeg binary from settings.
    ///
    /// Resolution order: explicit `ffmpeg_path`, then `search_dir`,
    /// then the inherited PATH. The resolved binary is probed with
    /// `-version` so a stale config entry fails here, before any audio
    /// file is touched.
    pub fn resolve(settings: &DecoderSettings) -> Result<Self, DecoderError> {
        let binary = locate_binary(settings)?;

        probe(&binary)?;
        tracing::debug!("Resolved ffmpeg: {}", binary.display());

        Ok(Self { binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Decode any supported input into a 16 kHz mono s16 WAV inside
    /// `out_dir`, returning the path of the decoded file.
    pub fn decode_to_wav(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, DecoderError> {
        let output = out_dir.join("decoded.wav");

        tracing::debug!(
            "Decoding {} -> {}",
            input.display(),
            output.display()
        );

        let result = Command::new(&self.binary)
            .arg("-nostdin")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-ar")
            .arg("16000")
            .arg("-ac")
            .arg("1")
            .arg("-acodec")
            .arg("pcm_s16le")
            .arg(&output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| DecoderError::Spawn {
                bin: self.binary.display().to_string(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(DecoderError::Failed {
                input: input.display().to_string(),
                stderr: last_line(&stderr),
            });
        }

        Ok(output)
    }
}

fn locate_binary(settings: &DecoderSettings) -> Result<PathBuf, DecoderError> {
    let explicit = settings.ffmpeg_path.trim();
    if !explicit.is_empty() {
        let path = PathBuf::from(explicit);
        if path.is_file() {
            return Ok(path);
        }
        return Err(DecoderError::NotFound(format!(
            "configured decoder.ffmpeg_path does not exist: {}",
            path.display()
        )));
    }

    let search_dir = settings.search_dir.trim();
    if !search_dir.is_empty() {
        let candidate = Path::new(search_dir).join(FFMPEG_BINARY);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    if let Some(path) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&path) {
            let candidate = dir.join(FFMPEG_BINARY);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(DecoderError::NotFound(
        "ffmpeg not found. Install ffmpeg, or point decoder.ffmpeg_path \
         (or decoder.search_dir) at it in the config file."
            .to_string(),
    ))
}

fn probe(binary: &Path) -> Result<(), DecoderError> {
    let status = Command::new(binary)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| DecoderError::Spawn {
            bin: binary.display().to_string(),
            source,
        })?;

    if !status.success() {
        return Err(DecoderError::NotFound(format!(
            "{} did not respond to -version",
            binary.display()
        )));
    }

    Ok(())
}

fn last_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("unknown ffmpeg error")
        .to_string()
}
