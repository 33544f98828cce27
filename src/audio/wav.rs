use std::path::Path;

use anyhow::{Context, Result, bail};

/// Sample rate every engine in the pipeline expects
pub const SAMPLE_RATE: u32 = 16_000;

/// Read a PCM WAV file produced by the conversion step.
///
/// Returns the raw samples and the sample rate. Only mono 16-bit integer
/// payloads are accepted; the converter always produces exactly that.
pub fn read_pcm(path: &Path) -> Result<(Vec<i16>, u32)> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        bail!(
            "expected mono audio, got {} channels in {}",
            spec.channels,
            path.display()
        );
    }
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!("expected 16-bit integer PCM in {}", path.display());
    }

    let samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read WAV samples from {}", path.display()))?;

    Ok((samples, spec.sample_rate))
}

/// Convert i16 PCM samples to f32 normalized to [-1.0, 1.0]
pub fn samples_to_f32(samples: &[i16]) -> Vec<f32> {
    samples
        .iter()
        .map(|&sample| sample as f32 / 32768.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_read_pcm_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, &[0, 1000, -1000, i16::MAX, i16::MIN]);

        let (samples, rate) = read_pcm(&path).unwrap();

        assert_eq!(rate, SAMPLE_RATE);
        assert_eq!(samples, vec![0, 1000, -1000, i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_read_pcm_rejects_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 2, &[0, 0, 1, 1]);

        let err = read_pcm(&path).unwrap_err().to_string();
        assert!(err.contains("mono"), "unexpected error: {err}");
    }

    #[test]
    fn test_read_pcm_missing_file() {
        assert!(read_pcm(Path::new("/nonexistent/x.wav")).is_err());
    }

    #[test]
    fn test_samples_to_f32_stays_in_unit_range() {
        let converted = samples_to_f32(&[0, i16::MAX, i16::MIN]);
        assert_eq!(converted[0], 0.0);
        assert!(converted.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!((converted[1] - 0.99997).abs() < 1e-4);
        assert_eq!(converted[2], -1.0);
    }
}
