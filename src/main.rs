use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use escriba::{Credentials, ModelHub, PipelineConfig, pipeline};

#[derive(Parser)]
#[command(name = "escriba")]
#[command(author, version, about = "Speaker-attributed audio transcription to DOCX and PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio file into speaker-labeled DOCX and PDF documents
    Transcribe {
        /// Input audio file; a file dialog opens when omitted
        audio: Option<PathBuf>,

        /// Directory for output documents (defaults to the current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Whisper model size (tiny, base, small, medium, large-v3)
        #[arg(long, default_value = "base")]
        model: String,

        /// Transcription language code, or "auto" to detect
        #[arg(long, default_value = "auto")]
        language: String,

        /// Maximum silence inside one turn, in seconds
        #[arg(long, default_value = "0.5")]
        max_gap: f64,

        /// Prefix for speaker labels in the documents
        #[arg(long, default_value = "NARRADOR")]
        speaker_prefix: String,

        /// Maximum number of distinct speakers
        #[arg(long, default_value = "6")]
        max_speakers: usize,

        /// Whisper inference threads
        #[arg(long)]
        threads: Option<usize>,

        /// TTF font for the PDF export (DejaVu Sans is searched by default)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Also write a machine-readable JSON transcript to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Download and cache the models without processing any audio
    Models {
        /// Whisper model size to fetch
        #[arg(long, default_value = "base")]
        model: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Transcribe {
            audio,
            output_dir,
            model,
            language,
            max_gap,
            speaker_prefix,
            max_speakers,
            threads,
            font,
            json,
            verbose,
        } => {
            setup_logging(verbose);

            // Credential check comes first: without it nothing may run
            let credentials = Credentials::from_env()?;

            let Some(input) = audio.or_else(pick_input_file) else {
                println!("No audio file selected. Exiting.");
                return Ok(());
            };

            let config = PipelineConfig {
                input,
                output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
                hf_token: credentials.hf_token,
                whisper_model: model,
                language,
                max_gap,
                speaker_prefix,
                max_speakers,
                threads,
                font,
                json,
            };

            let report = pipeline::run(&config)?;

            println!();
            println!("Transcription complete: {} turns written.", report.turns);
            println!("  {}", report.docx_path.display());
            println!("  {}", report.pdf_path.display());
            if let Some(json_path) = report.json_path {
                println!("  {}", json_path.display());
            }
            Ok(())
        }

        Commands::Models { model, verbose } => {
            setup_logging(verbose);
            let credentials = Credentials::from_env()?;
            let hub = ModelHub::new(&credentials.hf_token)?;
            let paths = hub.ensure_all(&model)?;
            println!("Models ready:");
            println!("  segmentation: {}", paths.segmentation.display());
            println!("  embedding:    {}", paths.embedding.display());
            println!("  whisper:      {}", paths.whisper.display());
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Native open-file dialog used when no path is given on the command line
fn pick_input_file() -> Option<PathBuf> {
    println!("Select the audio file to transcribe.");
    rfd::FileDialog::new()
        .set_title("Select an audio file")
        .add_filter("Audio", &["mp3", "wav", "m4a", "flac", "ogg", "opus"])
        .pick_file()
}
