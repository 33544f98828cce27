pub mod audio;
pub mod config;
pub mod engines;
pub mod export;
pub mod hub;
pub mod merge;
pub mod models;
pub mod pipeline;

pub use audio::{ConvertError, convert_to_wav, converted_wav_path, read_pcm, samples_to_f32};
pub use config::{Credentials, HF_TOKEN_ENV, PipelineConfig};
pub use engines::{DiarizerConfig, PyannoteDiarizer, TranscriberConfig, WhisperTranscriber};
pub use export::{DocxExporter, MachineTranscript, PdfExporter, RunMetadata, resolve_font};
pub use hub::{ModelHub, ModelPaths};
pub use merge::{GroupingConfig, attribute_words, format_timestamp, group_turns, merge_turns};
pub use models::{AttributedWord, SpeakerInterval, SpeakerTag, TagError, Turn, Word};
pub use pipeline::PipelineReport;
