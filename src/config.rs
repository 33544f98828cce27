use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Environment variable holding the Hugging Face access token
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";

/// Out-of-band credentials, validated once at startup.
///
/// The diarization models are fetched from the Hugging Face hub, which
/// requires an access token; without one the run must not start at all.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub hf_token: String,
}

impl Credentials {
    /// Read the token from the environment. Absence or an empty value is a
    /// fatal configuration error, detected before any other work happens.
    pub fn from_env() -> Result<Self> {
        let hf_token = std::env::var(HF_TOKEN_ENV)
            .with_context(|| format!("{HF_TOKEN_ENV} environment variable not set"))?;
        if hf_token.trim().is_empty() {
            bail!("{HF_TOKEN_ENV} environment variable is empty");
        }
        Ok(Self { hf_token })
    }
}

/// Everything one pipeline run needs, assembled in `main` from the command
/// line and the environment, then passed explicitly into
/// [`crate::pipeline::run`]. There is no process-wide configuration state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source audio file
    pub input: PathBuf,
    /// Directory receiving the documents and the temporary WAV
    pub output_dir: PathBuf,
    /// Hugging Face token used for model downloads
    pub hf_token: String,
    /// Whisper model size (e.g. "base", "medium")
    pub whisper_model: String,
    /// Transcription language code, "auto" to autodetect
    pub language: String,
    /// Turn-grouping gap threshold in seconds
    pub max_gap: f64,
    /// Prefix for human-readable speaker labels
    pub speaker_prefix: String,
    /// Upper bound on distinct diarization speakers
    pub max_speakers: usize,
    /// Whisper thread override
    pub threads: Option<usize>,
    /// Explicit TTF for the PDF export
    pub font: Option<PathBuf>,
    /// Optional machine-readable JSON output path
    pub json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_from_env() {
        unsafe { std::env::set_var(HF_TOKEN_ENV, "hf_test_token") };
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.hf_token, "hf_test_token");

        unsafe { std::env::set_var(HF_TOKEN_ENV, " ") };
        assert!(Credentials::from_env().is_err());

        unsafe { std::env::remove_var(HF_TOKEN_ENV) };
        let err = Credentials::from_env().unwrap_err().to_string();
        assert!(err.contains(HF_TOKEN_ENV), "unexpected error: {err}");
    }
}
