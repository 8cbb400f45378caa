//! Audio file discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extensions accepted as transcription input, matched case-sensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac", "ogg"];

/// Scan a single directory (non-recursive) for audio files.
///
/// Candidates are returned in whatever order `read_dir` yields them,
/// which is platform-dependent; no sort is imposed. An empty result is
/// a normal outcome, not an error.
pub fn discover_input(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?;

    let mut candidates = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| AUDIO_EXTENSIONS.contains(&ext))
            .unwrap_or(false);

        if matches {
            tracing::debug!("Found audio file: {}", path.display());
            candidates.push(path);
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn finds_only_allow_listed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp3", "b.wav", "c.txt", "d.flac", "e.mp4"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut found: Vec<String> = discover_input(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        found.sort();

        assert_eq!(found, vec!["a.mp3", "b.wav", "d.flac"]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("shout.MP3")).unwrap();
        File::create(dir.path().join("quiet.mp3")).unwrap();

        let found = discover_input(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "quiet.mp3");
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_input(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn subdirectories_are_not_descended() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested.mp3");
        std::fs::create_dir(&sub).unwrap();
        File::create(sub.join("inner.wav")).unwrap();

        // A directory named like an audio file is not a candidate,
        // and its contents are not scanned.
        assert!(discover_input(dir.path()).unwrap().is_empty());
    }
}
