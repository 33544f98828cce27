pub mod diarizer;
pub mod transcriber;

pub use diarizer::{DiarizerConfig, PyannoteDiarizer};
pub use transcriber::{TranscriberConfig, WhisperTranscriber};
