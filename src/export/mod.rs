pub mod docx;
pub mod json;
pub mod pdf;

pub use docx::DocxExporter;
pub use json::{MachineTranscript, RunMetadata};
pub use pdf::{PdfExporter, resolve_font};

use crate::merge::format_timestamp;
use crate::models::Turn;

/// Header line shared by both document formats:
/// `<speaker> (<start> --> <end>):`
pub(crate) fn entry_header(turn: &Turn) -> String {
    format!(
        "{} ({} --> {}):",
        turn.speaker,
        format_timestamp(turn.start),
        format_timestamp(turn.end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_header_format() {
        let turn = Turn {
            speaker: "NARRADOR 1".to_string(),
            text: "hi there".to_string(),
            start: 0.1,
            end: 0.9,
        };
        assert_eq!(
            entry_header(&turn),
            "NARRADOR 1 (0:00:00.100000 --> 0:00:00.900000):"
        );
    }
}
