use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Turn;

/// Metadata about one pipeline run, embedded in the JSON dump
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    /// Base name of the source audio file
    pub source: String,
    /// Words emitted by the transcription engine
    pub words_transcribed: usize,
    /// Words that fell inside a diarization interval
    pub words_attributed: usize,
    /// Diarization intervals
    pub intervals: usize,
    /// Final speaker turns
    pub turns: usize,
    /// Decoded audio duration in seconds
    pub duration_seconds: f64,
}

/// Machine-readable transcript, written only when `--json` is requested
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscript<'a> {
    pub turns: &'a [Turn],
    pub metadata: RunMetadata,
}

impl<'a> MachineTranscript<'a> {
    pub fn new(turns: &'a [Turn], metadata: RunMetadata) -> Self {
        Self { turns, metadata }
    }

    /// Write pretty-printed JSON; an existing file is overwritten.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON transcript")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_roundtrips_through_serde() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let turns = vec![Turn {
            speaker: "NARRADOR 1".to_string(),
            text: "hi there".to_string(),
            start: 0.1,
            end: 0.9,
        }];
        let metadata = RunMetadata {
            source: "interview".to_string(),
            words_transcribed: 3,
            words_attributed: 2,
            intervals: 1,
            turns: 1,
            duration_seconds: 12.5,
        };

        MachineTranscript::new(&turns, metadata)
            .write_file(&path)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["source"], "interview");
        assert_eq!(value["metadata"]["words_attributed"], 2);
        assert_eq!(value["turns"][0]["speaker"], "NARRADOR 1");
        assert_eq!(value["turns"][0]["text"], "hi there");
    }
}
