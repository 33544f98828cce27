use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use docx_rs::{Docx, Paragraph, Run};

use super::entry_header;
use crate::models::Turn;

/// Word-processor export of the final transcript.
///
/// One bold header paragraph per turn (speaker label and time span),
/// followed by the turn text.
pub struct DocxExporter<'a> {
    turns: &'a [Turn],
    title: String,
}

impl<'a> DocxExporter<'a> {
    pub fn new(turns: &'a [Turn], source_name: &str) -> Self {
        Self {
            turns,
            title: format!("Transcript of {source_name}"),
        }
    }

    /// Write the document; an existing file at `path` is overwritten.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(self.title.as_str()).bold().size(32)),
        );

        for turn in self.turns {
            docx = docx
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text(entry_header(turn)).bold()),
                )
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(turn.text.as_str())));
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        docx.build()
            .pack(file)
            .with_context(|| format!("Failed to write DOCX to {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(speaker: &str, text: &str, start: f64, end: f64) -> Turn {
        Turn {
            speaker: speaker.to_string(),
            text: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_write_file_produces_nonempty_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let turns = vec![
            turn("NARRADOR 1", "hi there", 0.1, 0.9),
            turn("NARRADOR 2", "bye", 5.2, 5.6),
        ];

        DocxExporter::new(&turns, "interview")
            .write_file(&path)
            .unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"stale").unwrap();

        DocxExporter::new(&[], "empty").write_file(&path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_ne!(written, b"stale");
    }
}
