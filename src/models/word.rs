use serde::{Deserialize, Serialize};

use super::SpeakerTag;

/// A single recognized word with its timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The recognized text - immutable, never changed by the pipeline
    pub text: String,
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Duration of this word in seconds
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// A word paired with the speaker tag of the interval it was assigned to.
///
/// Derived during attribution, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedWord {
    pub word: Word,
    pub tag: SpeakerTag,
}
