use wavesplit_foundation::{sample_from_le_bytes, AudioError, PcmSpec};

/// Check that a stream layout is one the decoder can handle.
pub fn validate_spec(spec: &PcmSpec) -> Result<(), AudioError> {
    match spec.channels {
        1 | 2 => {}
        channels => return Err(AudioError::UnsupportedChannelLayout { channels }),
    }
    if !(1..=4).contains(&spec.sample_width) {
        return Err(AudioError::UnsupportedSampleWidth {
            bytes: spec.sample_width,
        });
    }
    Ok(())
}

/// Decode a block of interleaved little-endian PCM bytes into normalized
/// amplitudes, one value per frame.
///
/// Stereo frames are merged by summing the raw left and right integers
/// before dividing by the single-sample full scale, so merged values can
/// exceed unit amplitude. Trailing bytes that do not form a complete frame
/// are dropped.
pub fn decode_block(bytes: &[u8], spec: &PcmSpec) -> Result<Vec<f32>, AudioError> {
    validate_spec(spec)?;

    let width = spec.sample_width as usize;
    let frame_size = spec.frame_size();
    let full_scale = spec.full_scale();

    let mut block = Vec::with_capacity(bytes.len() / frame_size);
    if spec.channels == 1 {
        for frame in bytes.chunks_exact(width) {
            block.push((sample_from_le_bytes(frame) as f64 / full_scale) as f32);
        }
    } else {
        for frame in bytes.chunks_exact(frame_size) {
            let left = sample_from_le_bytes(&frame[..width]);
            let right = sample_from_le_bytes(&frame[width..]);
            block.push(((left + right) as f64 / full_scale) as f32);
        }
    }
    Ok(block)
}
