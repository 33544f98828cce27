use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use genpdf::{Alignment, Element, SimplePageDecorator, elements, fonts, style};

use super::entry_header;
use crate::models::Turn;

/// Candidate locations for the DejaVu Sans face used in the PDF export
const FONT_CANDIDATES: &[&str] = &[
    "DejaVuSans.ttf",
    "fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Find a usable TTF for the PDF body: an explicit override wins, otherwise
/// the first existing candidate location.
pub fn resolve_font(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        bail!("font file not found at {}", path.display());
    }

    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or_else(|| {
            anyhow!("DejaVuSans.ttf not found; place it next to the binary or pass --font")
        })
}

/// Paginated export of the final transcript.
///
/// 10 pt body with a centered title; wrapping and page breaks are handled
/// by the layout engine.
pub struct PdfExporter<'a> {
    turns: &'a [Turn],
    title: String,
    font_path: PathBuf,
}

impl<'a> PdfExporter<'a> {
    pub fn new(turns: &'a [Turn], source_name: &str, font_path: PathBuf) -> Self {
        Self {
            turns,
            title: format!("Transcript of {source_name}"),
            font_path,
        }
    }

    /// Write the document; an existing file at `path` is overwritten.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let data = std::fs::read(&self.font_path)
            .with_context(|| format!("Failed to read font {}", self.font_path.display()))?;
        let font = fonts::FontData::new(data, None)
            .map_err(|e| anyhow!("Failed to parse font {}: {e}", self.font_path.display()))?;
        // One face for every style slot; the export uses a single weight
        let family = fonts::FontFamily {
            regular: font.clone(),
            bold: font.clone(),
            italic: font.clone(),
            bold_italic: font,
        };

        let mut doc = genpdf::Document::new(family);
        doc.set_title(self.title.clone());
        doc.set_font_size(10);
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(
            elements::Paragraph::new(self.title.clone())
                .aligned(Alignment::Center)
                .styled(style::Style::new().with_font_size(14)),
        );
        doc.push(elements::Break::new(1));

        for turn in self.turns {
            doc.push(elements::Paragraph::new(entry_header(turn)));
            doc.push(elements::Paragraph::new(turn.text.clone()));
            doc.push(elements::Break::new(1));
        }

        doc.render_to_file(path)
            .map_err(|e| anyhow!("Failed to write PDF to {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_font_explicit_missing_is_error() {
        let err = resolve_font(Some(Path::new("/nonexistent/font.ttf")))
            .unwrap_err()
            .to_string();
        assert!(err.contains("not found"), "unexpected error: {err}");
    }

    #[test]
    fn test_resolve_font_explicit_existing_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.ttf");
        std::fs::write(&path, b"not really a font").unwrap();

        let resolved = resolve_font(Some(&path)).unwrap();
        assert_eq!(resolved, path);
    }
}
