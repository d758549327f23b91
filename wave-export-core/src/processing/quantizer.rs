/// Float → 16-bit PCM quantization.
///
/// One policy for the whole crate: clamp, asymmetric scale, truncate toward
/// zero. The asymmetry mirrors the signed 16-bit range itself — negatives
/// scale by 32768, positives by 32767 — so full-scale input maps to exactly
/// -32768 / 32767 and no sample can overflow.
/// Quantize one normalized sample to a signed 16-bit value.
///
/// The input is clamped to `[-1.0, 1.0]` first; the scaled value is
/// truncated toward zero, not rounded.
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped > 0.0 {
        clamped * 32767.0
    } else {
        clamped * 32768.0
    };
    scaled as i16
}

/// Convert a slice of normalized samples to 16-bit PCM little-endian bytes.
///
/// Sample order is preserved; output length = `samples.len() * 2` bytes.
pub fn pcm16_bytes(samples: &[f32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        data.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }
    data
}
