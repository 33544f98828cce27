use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Suffix appended to the input's base name for the temporary WAV artifact
const CONVERTED_SUFFIX: &str = "_converted.wav";

/// Errors from the ffmpeg conversion boundary.
///
/// This is the pipeline's only dedicated recovery point: a conversion
/// failure aborts the run before any model is invoked.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not launch ffmpeg ({source}); install ffmpeg and make sure it is on PATH")]
    Spawn {
        #[source]
        source: io::Error,
    },
    #[error("ffmpeg exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Deterministic path for the temporary decoded artifact:
/// `<dir>/<input base>_converted.wav`. An existing file at that path is
/// overwritten by the conversion.
pub fn converted_wav_path(input: &Path, dir: &Path) -> PathBuf {
    let base = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    dir.join(format!("{base}{CONVERTED_SUFFIX}"))
}

fn ffmpeg_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-i".into(),
        input.as_os_str().to_owned(),
        "-ar".into(),
        "16000".into(),
        "-ac".into(),
        "1".into(),
        "-y".into(),
        output.as_os_str().to_owned(),
    ]
}

/// Convert an arbitrary audio file into mono 16 kHz PCM WAV.
///
/// Runs `ffmpeg -i <input> -ar 16000 -ac 1 -y <output>` with captured
/// output. Attempted exactly once, no retry.
pub fn convert_to_wav(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let result = Command::new("ffmpeg")
        .args(ffmpeg_args(input, output))
        .output()
        .map_err(|source| ConvertError::Spawn { source })?;

    if !result.status.success() {
        return Err(ConvertError::Failed {
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_wav_path_uses_base_name() {
        let path = converted_wav_path(Path::new("/tmp/in/interview.mp3"), Path::new("/tmp/out"));
        assert_eq!(path, PathBuf::from("/tmp/out/interview_converted.wav"));
    }

    #[test]
    fn test_converted_wav_path_without_extension() {
        let path = converted_wav_path(Path::new("recording"), Path::new("."));
        assert_eq!(path, PathBuf::from("./recording_converted.wav"));
    }

    #[test]
    fn test_ffmpeg_args_request_mono_16khz_overwrite() {
        let args = ffmpeg_args(Path::new("in.mp3"), Path::new("out.wav"));
        let args: Vec<&str> = args.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(
            args,
            vec!["-i", "in.mp3", "-ar", "16000", "-ac", "1", "-y", "out.wav"]
        );
    }
}
