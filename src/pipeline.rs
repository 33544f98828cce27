use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::audio;
use crate::config::PipelineConfig;
use crate::engines::{DiarizerConfig, PyannoteDiarizer, TranscriberConfig, WhisperTranscriber};
use crate::export::{DocxExporter, MachineTranscript, PdfExporter, RunMetadata, resolve_font};
use crate::hub::ModelHub;
use crate::merge::{GroupingConfig, attribute_words, group_turns};

/// Paths and counts produced by one pipeline run
#[derive(Debug)]
pub struct PipelineReport {
    pub docx_path: PathBuf,
    pub pdf_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub words_transcribed: usize,
    pub words_attributed: usize,
    pub intervals: usize,
    pub turns: usize,
}

/// Run the whole pipeline for one audio file.
///
/// The five steps run strictly in sequence, each external call attempted
/// exactly once. Conversion is the only step with a dedicated error
/// boundary; model failures propagate to the caller's generic handler.
/// The temporary WAV is deleted only after a fully successful run - on any
/// failure it is intentionally left behind for inspection.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let base = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable base name")?
        .to_string();

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    println!(
        "1/5 - Converting '{}' to 16 kHz mono WAV...",
        config.input.display()
    );
    let wav_path = audio::converted_wav_path(&config.input, &config.output_dir);
    audio::convert_to_wav(&config.input, &wav_path)
        .map_err(|err| anyhow::Error::new(err).context("audio conversion failed"))?;
    let (samples, sample_rate) = audio::read_pcm(&wav_path)?;
    let duration_seconds = samples.len() as f64 / sample_rate as f64;
    info!("decoded {duration_seconds:.1}s of audio");

    println!("2/5 - Identifying speakers (diarization)...");
    let hub = ModelHub::new(&config.hf_token)?;
    let models = hub.ensure_all(&config.whisper_model)?;
    let diarizer = PyannoteDiarizer::new(DiarizerConfig {
        segmentation_model: models.segmentation.clone(),
        embedding_model: models.embedding.clone(),
        max_speakers: config.max_speakers,
        ..DiarizerConfig::default()
    })?;
    let intervals = diarizer.diarize(&samples, sample_rate)?;
    info!("{} diarization intervals", intervals.len());

    println!("3/5 - Transcribing speech to text...");
    let transcriber = WhisperTranscriber::new(TranscriberConfig {
        model_path: models.whisper.clone(),
        language: config.language.clone(),
        threads: config.threads,
    })?;
    let words = transcriber.transcribe(&audio::samples_to_f32(&samples))?;
    info!("{} transcribed words", words.len());

    println!("4/5 - Merging transcription with speaker intervals...");
    let attributed = attribute_words(&words, &intervals);
    let dropped = words.len() - attributed.len();
    if dropped > 0 {
        info!("{dropped} words fell outside every diarization interval and were dropped");
    }
    let grouping = GroupingConfig {
        max_gap: config.max_gap,
        speaker_prefix: config.speaker_prefix.clone(),
    };
    let turns = group_turns(&attributed, &grouping)?;
    info!("{} speaker turns", turns.len());

    println!("5/5 - Writing output documents...");
    let docx_path = config.output_dir.join(format!("{base}.docx"));
    DocxExporter::new(&turns, &base).write_file(&docx_path)?;

    let font = resolve_font(config.font.as_deref())?;
    let pdf_path = config.output_dir.join(format!("{base}.pdf"));
    PdfExporter::new(&turns, &base, font).write_file(&pdf_path)?;

    let json_path = match &config.json {
        Some(path) => {
            let metadata = RunMetadata {
                source: base.clone(),
                words_transcribed: words.len(),
                words_attributed: attributed.len(),
                intervals: intervals.len(),
                turns: turns.len(),
                duration_seconds,
            };
            MachineTranscript::new(&turns, metadata).write_file(path)?;
            Some(path.clone())
        }
        None => None,
    };

    // The temporary artifact is removed only on success
    fs::remove_file(&wav_path)
        .with_context(|| format!("Failed to remove temporary WAV {}", wav_path.display()))?;

    Ok(PipelineReport {
        docx_path,
        pdf_path,
        json_path,
        words_transcribed: words.len(),
        words_attributed: attributed.len(),
        intervals: intervals.len(),
        turns: turns.len(),
    })
}
