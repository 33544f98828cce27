use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::models::Word;

/// Configuration for the Whisper transcription engine
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// Path to the GGML model file
    pub model_path: PathBuf,
    /// Language code (e.g. "pt", "en"), or "auto" to let the model detect
    pub language: String,
    /// Number of inference threads (None = one per core, capped at 8)
    pub threads: Option<usize>,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/ggml-base.bin"),
            language: "auto".to_string(),
            threads: None,
        }
    }
}

/// Speech-to-text engine producing per-word timestamps.
///
/// Wraps whisper.cpp with token-level timestamps enabled; subword tokens
/// are reassembled into whole words before leaving the adapter.
pub struct WhisperTranscriber {
    context: WhisperContext,
    config: TranscriberConfig,
}

impl WhisperTranscriber {
    /// Load the model from disk. Fails when the model file is missing.
    pub fn new(config: TranscriberConfig) -> Result<Self> {
        if !config.model_path.exists() {
            bail!("Whisper model not found at {}", config.model_path.display());
        }

        let path = config
            .model_path
            .to_str()
            .context("Invalid UTF-8 in Whisper model path")?;
        let context = WhisperContext::new_with_params(path, WhisperContextParameters::default())
            .map_err(|e| anyhow!("Failed to load Whisper model: {e}"))?;

        Ok(Self { context, config })
    }

    /// Transcribe mono 16 kHz f32 samples into timestamped words.
    ///
    /// Attempted exactly once; inference failures propagate to the caller.
    pub fn transcribe(&self, samples: &[f32]) -> Result<Vec<Word>> {
        let mut state = self
            .context
            .create_state()
            .map_err(|e| anyhow!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        if self.config.language == "auto" {
            params.set_language(None);
        } else {
            params.set_language(Some(&self.config.language));
        }
        params.set_translate(false);
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(self.config.threads.unwrap_or_else(default_threads) as i32);

        state
            .full(params, samples)
            .map_err(|e| anyhow!("Whisper inference failed: {e}"))?;

        let mut assembler = WordAssembler::default();
        let num_segments = state.full_n_segments();
        for seg_idx in 0..num_segments {
            let Some(segment) = state.get_segment(seg_idx) else {
                continue;
            };
            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let Some(token) = segment.get_token(tok_idx) else {
                    continue;
                };
                let Ok(text) = token.to_str() else {
                    continue;
                };

                // Special tokens like [_BEG_] or <|endoftext|> carry no speech
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                let data = token.token_data();
                // Token timestamps are in centiseconds (10ms units)
                let start = data.t0 as f64 / 100.0;
                let end = data.t1 as f64 / 100.0;
                assembler.push_token(text, start, end);
            }
        }

        let words = assembler.finish();
        debug!("whisper produced {} words", words.len());
        Ok(words)
    }
}

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(8)
}

/// Reassembles subword tokens into whole words.
///
/// The engine emits subword tokens; a token whose text starts with a space
/// opens a new word, anything else extends the current one. Assembled words
/// are trimmed, and words without a positive duration are discarded.
#[derive(Default)]
pub(crate) struct WordAssembler {
    words: Vec<Word>,
    current: Option<Word>,
}

impl WordAssembler {
    pub(crate) fn push_token(&mut self, text: &str, start: f64, end: f64) {
        if text.starts_with(' ') || self.current.is_none() {
            self.flush();
            self.current = Some(Word::new(text, start, end));
        } else if let Some(current) = &mut self.current {
            current.text.push_str(text);
            current.end = end;
        }
    }

    fn flush(&mut self) {
        if let Some(word) = self.current.take() {
            let text = word.text.trim();
            if !text.is_empty() && word.end > word.start {
                self.words.push(Word::new(text, word.start, word.end));
            }
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Word> {
        self.flush();
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_new_nonexistent_model_returns_error() {
        let config = TranscriberConfig {
            model_path: PathBuf::from("/nonexistent/model.bin"),
            ..TranscriberConfig::default()
        };
        let err = WhisperTranscriber::new(config).unwrap_err().to_string();
        assert!(err.contains("not found"), "unexpected error: {err}");
    }

    #[test]
    fn test_assembler_joins_subword_tokens() {
        let mut assembler = WordAssembler::default();
        assembler.push_token(" trans", 0.0, 0.2);
        assembler.push_token("cription", 0.2, 0.5);
        assembler.push_token(" works", 0.6, 0.9);

        let words = assembler.finish();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], Word::new("transcription", 0.0, 0.5));
        assert_eq!(words[1], Word::new("works", 0.6, 0.9));
    }

    #[test]
    fn test_assembler_first_token_opens_word_without_space() {
        let mut assembler = WordAssembler::default();
        assembler.push_token("Hello", 0.0, 0.3);

        let words = assembler.finish();

        assert_eq!(words, vec![Word::new("Hello", 0.0, 0.3)]);
    }

    #[test]
    fn test_assembler_drops_zero_duration_words() {
        let mut assembler = WordAssembler::default();
        assembler.push_token(" blip", 1.0, 1.0);
        assembler.push_token(" kept", 1.2, 1.5);

        let words = assembler.finish();

        assert_eq!(words, vec![Word::new("kept", 1.2, 1.5)]);
    }

    #[test]
    fn test_assembler_empty_input() {
        assert!(WordAssembler::default().finish().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = TranscriberConfig::default();
        assert_eq!(config.model_path, Path::new("models/ggml-base.bin"));
        assert_eq!(config.language, "auto");
        assert!(config.threads.is_none());
    }
}
