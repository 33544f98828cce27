use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a diarization tag does not match the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("speaker tag {tag:?} does not match the \"<prefix>_<ordinal>\" shape")]
    Malformed { tag: String },
}

/// Opaque speaker identifier emitted by the diarization engine.
///
/// Tags have the shape `<prefix>_<ordinal>` (e.g. `SPEAKER_00`) and are
/// stable within a single run only - the same voice may get a different
/// tag on the next run or on a different file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerTag(String);

impl SpeakerTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag as emitted by the engine
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Zero-based ordinal parsed from the tag suffix
    pub fn ordinal(&self) -> Result<u32, TagError> {
        let (_, suffix) = self.0.rsplit_once('_').ok_or_else(|| TagError::Malformed {
            tag: self.0.clone(),
        })?;
        suffix.parse().map_err(|_| TagError::Malformed {
            tag: self.0.clone(),
        })
    }

    /// Human-readable 1-based label, e.g. `SPEAKER_00` -> `NARRADOR 1`
    pub fn label(&self, prefix: &str) -> Result<String, TagError> {
        Ok(format!("{} {}", prefix, self.ordinal()? + 1))
    }
}

impl fmt::Display for SpeakerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_from_well_formed_tag() {
        assert_eq!(SpeakerTag::new("SPEAKER_00").ordinal().unwrap(), 0);
        assert_eq!(SpeakerTag::new("SPEAKER_01").ordinal().unwrap(), 1);
        assert_eq!(SpeakerTag::new("SPEAKER_12").ordinal().unwrap(), 12);
    }

    #[test]
    fn test_label_is_one_based() {
        let tag = SpeakerTag::new("SPEAKER_00");
        assert_eq!(tag.label("NARRADOR").unwrap(), "NARRADOR 1");
        let tag = SpeakerTag::new("SPEAKER_01");
        assert_eq!(tag.label("NARRADOR").unwrap(), "NARRADOR 2");
    }

    #[test]
    fn test_label_is_deterministic() {
        let tag = SpeakerTag::new("SPEAKER_03");
        let first = tag.label("NARRADOR").unwrap();
        let second = tag.label("NARRADOR").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "NARRADOR 4");
    }

    #[test]
    fn test_malformed_tags_are_rejected() {
        for tag in ["SPEAKER", "SPEAKER_", "SPEAKER_xx", ""] {
            let err = SpeakerTag::new(tag).ordinal().unwrap_err();
            assert_eq!(
                err,
                TagError::Malformed {
                    tag: tag.to_string()
                }
            );
        }
    }

    #[test]
    fn test_ordinal_uses_last_underscore() {
        // Prefixes may themselves contain underscores
        assert_eq!(SpeakerTag::new("MAIN_SPEAKER_02").ordinal().unwrap(), 2);
    }
}
