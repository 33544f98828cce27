use serde::{Deserialize, Serialize};

use super::SpeakerTag;

/// A diarization interval attributed to one anonymous speaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerInterval {
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds (strictly greater than start)
    pub end: f64,
    /// Anonymous speaker tag for this interval
    pub tag: SpeakerTag,
}

impl SpeakerInterval {
    pub fn new(start: f64, end: f64, tag: SpeakerTag) -> Self {
        Self { start, end, tag }
    }

    /// Whether an instant falls inside the half-open span `[start, end)`
    pub fn covers(&self, instant: f64) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Length of the intersection between this interval and `[start, end]`
    pub fn overlap(&self, start: f64, end: f64) -> f64 {
        (self.end.min(end) - self.start.max(start)).max(0.0)
    }

    /// Duration of this interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn interval(start: f64, end: f64) -> SpeakerInterval {
        SpeakerInterval::new(start, end, SpeakerTag::new("SPEAKER_00"))
    }

    #[test]
    fn test_covers_is_half_open() {
        let iv = interval(1.0, 2.0);
        assert!(iv.covers(1.0));
        assert!(iv.covers(1.999));
        assert!(!iv.covers(2.0));
        assert!(!iv.covers(0.999));
    }

    #[test]
    fn test_overlap() {
        let iv = interval(1.0, 2.0);
        assert_relative_eq!(iv.overlap(1.5, 3.0), 0.5);
        assert_relative_eq!(iv.overlap(0.0, 1.25), 0.25);
        assert_eq!(iv.overlap(2.5, 3.0), 0.0);
    }
}
