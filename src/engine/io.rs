//! Audio file I/O
//!
//! Imports WAV files into [`SampleClip`]s and writes encoded clips back to
//! disk. Import converts whatever integer or float bit depth the file uses
//! to 32-bit float interleaved samples; export always goes through the
//! canonical 16-bit encoder in [`crate::engine::wav`].

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::debug;

use crate::engine::clip::SampleClip;
use crate::engine::wav;
use crate::error::{ClipsmithError, Result};

/// Import a WAV file as a sample clip
pub fn import_wav(path: &Path) -> Result<SampleClip> {
    if !path.exists() {
        return Err(ClipsmithError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )));
    }

    let reader = WavReader::open(path).map_err(|e| ClipsmithError::InvalidAudio {
        reason: format!("failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    debug!(
        "importing {}: {} ch, {} Hz, {}-bit {:?}",
        path.display(),
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let samples = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    SampleClip::from_interleaved(samples, spec.channels, spec.sample_rate)
}

/// Encode a clip and write the byte stream to disk
pub fn export_wav(clip: &SampleClip, path: &Path) -> Result<()> {
    let bytes = wav::encode(clip);
    debug!("writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes)?;
    Ok(())
}

/// Read samples from a WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| ClipsmithError::InvalidAudio {
                reason: format!("failed to read float samples: {}", e),
                source: Some(Box::new(e)),
            }),
        SampleFormat::Int => match bits_per_sample {
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|v| v as f32 / 128.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| ClipsmithError::InvalidAudio {
                    reason: format!("failed to read 8-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| ClipsmithError::InvalidAudio {
                    reason: format!("failed to read 16-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            24 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 8388608.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| ClipsmithError::InvalidAudio {
                    reason: format!("failed to read 24-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2147483648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| ClipsmithError::InvalidAudio {
                    reason: format!("failed to read 32-bit int samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            other => Err(ClipsmithError::Unsupported {
                format: format!("{}-bit integer audio", other),
            }),
        },
    }
}
