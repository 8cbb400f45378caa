//! Configuration module for scribe
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{DecoderSettings, Settings};
