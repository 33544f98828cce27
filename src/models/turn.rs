use serde::{Deserialize, Serialize};

/// One continuous block of speech attributed to a single speaker label.
///
/// Turns are produced in temporal order and never reordered or mutated
/// after creation; the ordered sequence of turns is the sole artifact
/// handed to the exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Human-readable speaker label, e.g. `NARRADOR 1`
    pub speaker: String,
    /// Space-joined text of every word in the turn
    pub text: String,
    /// Start timestamp in seconds (first word's start)
    pub start: f64,
    /// End timestamp in seconds (last word's end)
    pub end: f64,
}

impl Turn {
    /// Duration of this turn in seconds
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Number of words in the turn text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
