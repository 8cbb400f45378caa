//! Transcript report rendering and writing

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use crate::transcription::{TranscriptionRequest, TranscriptionResult};

/// Render one transcription result as the report text.
///
/// Pure formatting: the same (request, result) pair always produces
/// byte-identical output. Timestamps are fixed-point with exactly two
/// decimals; segment ordinals are 1-based for display. With zero
/// segments the "Detailed segments:" header still appears, followed by
/// nothing.
pub fn render_report(request: &TranscriptionRequest, result: &TranscriptionResult) -> String {
    let mut out = String::new();

    out.push_str("WHISPER TRANSCRIPTION RESULTS\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    let _ = writeln!(out, "Audio file: {}", request.audio_path.display());
    let _ = writeln!(out, "Model: {}", request.model_size);
    let _ = writeln!(out, "Language: {}", result.detected_language);
    let _ = writeln!(out, "Text: {}", result.full_text);

    out.push_str("\nDetailed segments:\n");

    for (i, segment) in result.segments.iter().enumerate() {
        let _ = writeln!(out, "\nSegment {}:", i + 1);
        let _ = writeln!(out, "  Start: {:.2}s", segment.start);
        let _ = writeln!(out, "  End: {:.2}s", segment.end);
        let _ = writeln!(out, "  Text: {}", segment.text);
    }

    out
}

/// Write the report in one shot, replacing any existing file.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
