use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use pyannote_rs::{EmbeddingExtractor, EmbeddingManager};
use tracing::{debug, warn};

use crate::models::{SpeakerInterval, SpeakerTag};

/// Configuration for the diarization engine
#[derive(Debug, Clone)]
pub struct DiarizerConfig {
    /// Path to the segmentation ONNX model
    pub segmentation_model: PathBuf,
    /// Path to the speaker-embedding ONNX model
    pub embedding_model: PathBuf,
    /// Upper bound on distinct speakers tracked in one run
    pub max_speakers: usize,
    /// Similarity threshold for matching a segment to a known speaker
    pub similarity_threshold: f32,
}

impl Default for DiarizerConfig {
    fn default() -> Self {
        Self {
            segmentation_model: PathBuf::from("models/segmentation-3.0.onnx"),
            embedding_model: PathBuf::from("models/wespeaker_en_voxceleb_CAM++.onnx"),
            max_speakers: 6,
            similarity_threshold: 0.5,
        }
    }
}

/// Speaker-diarization engine over pyannote ONNX models.
///
/// Segmentation splits the timeline into speech segments; each segment's
/// speaker embedding is clustered against previously seen speakers.
pub struct PyannoteDiarizer {
    config: DiarizerConfig,
}

impl PyannoteDiarizer {
    /// Validate that the model files exist. Inference state is per run.
    pub fn new(config: DiarizerConfig) -> Result<Self> {
        for path in [&config.segmentation_model, &config.embedding_model] {
            if !path.exists() {
                bail!("diarization model not found at {}", path.display());
            }
        }
        Ok(Self { config })
    }

    /// Partition mono 16 kHz PCM into speaker-labeled intervals.
    ///
    /// Engine-internal cluster numbers are re-mapped to `SPEAKER_<NN>` tags
    /// in order of first appearance, so the tag space is dense and stable
    /// within the run. A segment whose embedding cannot be computed or
    /// matched is skipped with a warning rather than failing the run.
    pub fn diarize(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<SpeakerInterval>> {
        let segmentation_model = self
            .config
            .segmentation_model
            .to_str()
            .context("Invalid UTF-8 in segmentation model path")?;
        let embedding_model = self
            .config
            .embedding_model
            .to_str()
            .context("Invalid UTF-8 in embedding model path")?;

        let segments = pyannote_rs::segment(samples, sample_rate, segmentation_model)
            .map_err(|e| anyhow!("speech segmentation failed: {e}"))?;

        let mut extractor = EmbeddingExtractor::new(embedding_model)
            .map_err(|e| anyhow!("failed to load embedding model: {e}"))?;
        let mut manager = EmbeddingManager::new(self.config.max_speakers);

        let mut tags: HashMap<usize, SpeakerTag> = HashMap::new();
        let mut intervals = Vec::with_capacity(segments.len());

        for segment in segments {
            let embedding: Vec<f32> = match extractor.compute(&segment.samples) {
                Ok(values) => values.collect(),
                Err(err) => {
                    warn!(
                        "skipping segment {:.2}s-{:.2}s: embedding failed: {err}",
                        segment.start, segment.end
                    );
                    continue;
                }
            };

            let cluster = if manager.get_all_speakers().len() == self.config.max_speakers {
                match manager.get_best_speaker_match(embedding) {
                    Ok(cluster) => cluster,
                    Err(err) => {
                        warn!(
                            "skipping segment {:.2}s-{:.2}s: speaker match failed: {err}",
                            segment.start, segment.end
                        );
                        continue;
                    }
                }
            } else {
                match manager.search_speaker(embedding, self.config.similarity_threshold) {
                    Some(cluster) => cluster,
                    None => {
                        warn!(
                            "skipping segment {:.2}s-{:.2}s: no speaker slot available",
                            segment.start, segment.end
                        );
                        continue;
                    }
                }
            };

            let next_ordinal = tags.len();
            let tag = tags
                .entry(cluster)
                .or_insert_with(|| SpeakerTag::new(format!("SPEAKER_{next_ordinal:02}")))
                .clone();

            intervals.push(SpeakerInterval::new(
                segment.start as f64,
                segment.end as f64,
                tag,
            ));
        }

        debug!(
            "diarization produced {} intervals across {} speakers",
            intervals.len(),
            tags.len()
        );
        Ok(intervals)
    }
}
