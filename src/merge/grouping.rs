use crate::models::{AttributedWord, TagError, Turn};

/// Configuration for turn grouping
#[derive(Debug, Clone)]
pub struct GroupingConfig {
    /// Maximum silence between two words of the same speaker, in seconds.
    /// A gap of exactly this value starts a new turn.
    pub max_gap: f64,
    /// Prefix for human-readable speaker labels
    pub speaker_prefix: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            max_gap: 0.5,
            speaker_prefix: "NARRADOR".to_string(),
        }
    }
}

/// Group attributed words into speaker turns.
///
/// Single linear pass with an accumulator. Each word is compared against
/// the immediately preceding attributed word: when the tag is unchanged and
/// the silence between them is strictly shorter than `max_gap`, the word
/// extends the current turn; otherwise the turn is closed and a new one
/// starts. The final accumulator is emitted after the loop, and an empty
/// input produces an empty turn list.
///
/// Labels come from [`crate::models::SpeakerTag::label`]; a malformed tag
/// surfaces as [`TagError`] instead of producing a partial transcript.
pub fn group_turns(words: &[AttributedWord], config: &GroupingConfig) -> Result<Vec<Turn>, TagError> {
    let Some(first) = words.first() else {
        return Ok(Vec::new());
    };

    let mut turns = Vec::new();
    let mut current = Turn {
        speaker: first.tag.label(&config.speaker_prefix)?,
        text: first.word.text.clone(),
        start: first.word.start,
        end: first.word.end,
    };

    for pair in words.windows(2) {
        let (previous, word) = (&pair[0], &pair[1]);
        let gap = word.word.start - previous.word.end;

        if word.tag == previous.tag && gap < config.max_gap {
            current.text.push(' ');
            current.text.push_str(&word.word.text);
            current.end = word.word.end;
        } else {
            turns.push(current);
            current = Turn {
                speaker: word.tag.label(&config.speaker_prefix)?,
                text: word.word.text.clone(),
                start: word.word.start,
                end: word.word.end,
            };
        }
    }

    turns.push(current);
    Ok(turns)
}
