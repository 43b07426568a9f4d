//! Mono 16-bit PCM WAV encoding into an in-memory buffer.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::SynthError;

pub const HEADER_LEN: usize = 44;

/// Most samples a single 16-bit mono container can describe: the RIFF
/// size field holds `36 + 2n` in a `u32`.
pub const MAX_SAMPLES: usize = (u32::MAX as usize - 36) / 2;

/// Encode `samples` (nominally in `[-1, 1]`) as a WAV byte buffer.
///
/// Out-of-range samples are clamped before quantizing to `i16`.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, SynthError> {
    if sample_rate == 0 {
        return Err(SynthError::ZeroSampleRate);
    }
    if samples.len() > MAX_SAMPLES {
        return Err(SynthError::TooLong(samples.len()));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(HEADER_LEN + samples.len() * 2));
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &s in samples {
        writer.write_sample((s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}
