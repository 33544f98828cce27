use std::path::PathBuf;

use anyhow::{Context, Result};
use hf_hub::api::sync::{Api, ApiBuilder};
use tracing::info;

/// A model file pinned to a Hugging Face repository
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub repo: &'static str,
    pub file: &'static str,
}

/// Pyannote segmentation model (ONNX export)
pub const SEGMENTATION_MODEL: ModelSpec = ModelSpec {
    repo: "thewh1teagle/pyannote-rs",
    file: "segmentation-3.0.onnx",
};

/// WeSpeaker embedding model used for speaker clustering (ONNX export)
pub const EMBEDDING_MODEL: ModelSpec = ModelSpec {
    repo: "thewh1teagle/pyannote-rs",
    file: "wespeaker_en_voxceleb_CAM++.onnx",
};

/// Repository hosting the Whisper GGML conversions
pub const WHISPER_REPO: &str = "ggerganov/whisper.cpp";

/// Whisper GGML file name for a model size, e.g. `base` -> `ggml-base.bin`
pub fn whisper_model_file(size: &str) -> String {
    format!("ggml-{size}.bin")
}

/// Local paths of every model the pipeline needs
#[derive(Debug, Clone)]
pub struct ModelPaths {
    pub segmentation: PathBuf,
    pub embedding: PathBuf,
    pub whisper: PathBuf,
}

/// Authenticated access to the Hugging Face hub through the shared local
/// cache. Each file is downloaded on first use and reused afterwards.
pub struct ModelHub {
    api: Api,
}

impl ModelHub {
    pub fn new(token: &str) -> Result<Self> {
        let api = ApiBuilder::new()
            .with_token(Some(token.to_string()))
            .build()
            .context("Failed to initialize Hugging Face hub client")?;
        Ok(Self { api })
    }

    /// Resolve one repository file, downloading into the cache on first use.
    /// Attempted exactly once, no retry.
    pub fn fetch(&self, repo: &str, file: &str) -> Result<PathBuf> {
        self.api
            .model(repo.to_string())
            .get(file)
            .with_context(|| format!("Failed to fetch {file} from {repo}"))
    }

    /// Resolve the full model catalog for a run.
    pub fn ensure_all(&self, whisper_size: &str) -> Result<ModelPaths> {
        info!("Resolving segmentation model {}", SEGMENTATION_MODEL.file);
        let segmentation = self.fetch(SEGMENTATION_MODEL.repo, SEGMENTATION_MODEL.file)?;

        info!("Resolving embedding model {}", EMBEDDING_MODEL.file);
        let embedding = self.fetch(EMBEDDING_MODEL.repo, EMBEDDING_MODEL.file)?;

        let whisper_file = whisper_model_file(whisper_size);
        info!("Resolving Whisper model {whisper_file}");
        let whisper = self.fetch(WHISPER_REPO, &whisper_file)?;

        Ok(ModelPaths {
            segmentation,
            embedding,
            whisper,
        })
    }
}
