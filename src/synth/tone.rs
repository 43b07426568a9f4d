use std::f32::consts::PI;

use super::SynthError;
use super::wav::MAX_SAMPLES;

const TONE_AMPLITUDE: f32 = 0.1;
const NOISE_AMPLITUDE: f32 = 0.05;

/// Generate `seconds` of a sine at `frequency` with uniform noise mixed in.
///
/// `noise` must yield values in `[0, 1)`; it is centered before mixing.
/// Durations whose sample count cannot fit a WAV container are rejected
/// before anything is allocated.
pub fn tone(
    frequency: f32,
    seconds: f32,
    sample_rate: u32,
    mut noise: impl FnMut() -> f32,
) -> Result<Vec<f32>, SynthError> {
    if sample_rate == 0 {
        return Err(SynthError::ZeroSampleRate);
    }

    let wanted = f64::from(sample_rate) * f64::from(seconds.max(0.0));
    if !(wanted <= MAX_SAMPLES as f64) {
        return Err(SynthError::TooLong(wanted as usize));
    }
    let len = wanted as usize;

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f32 / sample_rate as f32;
        let s = (2.0 * PI * frequency * t).sin() * TONE_AMPLITUDE + (noise() - 0.5) * NOISE_AMPLITUDE;
        out.push(s);
    }
    Ok(out)
}
