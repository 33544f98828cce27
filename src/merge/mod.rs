pub mod attribution;
pub mod grouping;
pub mod timestamp;

pub use attribution::attribute_words;
pub use grouping::{GroupingConfig, group_turns};
pub use timestamp::format_timestamp;

use crate::models::{SpeakerInterval, TagError, Turn, Word};

/// Fuse transcribed words and diarization intervals into speaker turns.
///
/// Attribution assigns each word to its best-covering interval; grouping
/// collapses the attributed words into labeled turns. Words covered by no
/// interval do not appear in any turn.
pub fn merge_turns(
    words: &[Word],
    intervals: &[SpeakerInterval],
    config: &GroupingConfig,
) -> Result<Vec<Turn>, TagError> {
    let attributed = attribute_words(words, intervals);
    group_turns(&attributed, config)
}
