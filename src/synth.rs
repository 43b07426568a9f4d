//! Placeholder audio synthesis.
//!
//! Real recordings are not shipped, so every track gets a short looping
//! tone (sine at the track's base frequency plus a little noise) encoded
//! as a 16-bit mono PCM WAV blob that `rodio` can decode from memory.

mod tone;
mod wav;

use std::sync::Arc;

pub use tone::tone;
pub use wav::{HEADER_LEN, MAX_SAMPLES, encode_wav};

use crate::catalog::TrackSpec;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SynthError {
    #[error("sample rate must be non-zero")]
    ZeroSampleRate,
    #[error("{0} samples do not fit in a WAV container")]
    TooLong(usize),
    #[error("wav encoding failed: {0}")]
    Encode(String),
}

impl From<hound::Error> for SynthError {
    fn from(e: hound::Error) -> Self {
        Self::Encode(e.to_string())
    }
}

/// Synthesize the looping placeholder for `track` at `sample_rate`.
pub fn synthesize(track: &TrackSpec, sample_rate: u32, seconds: f32) -> Result<Arc<[u8]>, SynthError> {
    let samples = tone(track.frequency, seconds, sample_rate, rand::random::<f32>)?;
    let wav = encode_wav(&samples, sample_rate)?;
    Ok(wav.into())
}
