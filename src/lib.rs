//! scribe - Offline audio transcription with Whisper
//!
//! Finds an audio file, runs it through a local Whisper model, and writes
//! a timestamped transcript report.

pub mod cli;
pub mod config;
pub mod decoder;
pub mod discovery;
pub mod report;
pub mod transcription;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "scribe";
