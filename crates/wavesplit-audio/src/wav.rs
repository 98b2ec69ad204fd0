use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, info};

use wavesplit_foundation::{sample_from_le_bytes, AudioError, PcmSpec};

/// An integer PCM WAV file loaded fully into memory, exposing raw
/// interleaved frame bytes for scanning and extraction.
pub struct WavFile {
    spec: PcmSpec,
    frames: u64,
    data: Vec<u8>,
}

impl WavFile {
    /// Open `path`, parse the header, and load the whole data chunk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AudioError> {
        let reader = WavReader::open(path.as_ref())?;
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int {
            return Err(AudioError::FormatNotSupported {
                format: format!("{:?} samples", spec.sample_format),
            });
        }
        if spec.bits_per_sample % 8 != 0 {
            return Err(AudioError::FormatNotSupported {
                format: format!("{}-bit samples", spec.bits_per_sample),
            });
        }

        let pcm = PcmSpec {
            channels: spec.channels,
            sample_width: spec.bits_per_sample / 8,
            sample_rate: spec.sample_rate,
        };
        let frames = reader.duration() as u64;

        // After header parsing the reader sits at the start of the data
        // chunk; everything up to the declared frame count is sample data.
        let mut inner = reader.into_inner();
        let mut data = Vec::new();
        inner.read_to_end(&mut data)?;
        data.truncate(frames as usize * pcm.frame_size());

        info!(
            "Loaded WAV: {} Hz, {} channels, {} bits, {} frames",
            pcm.sample_rate,
            pcm.channels,
            pcm.sample_width * 8,
            frames
        );

        Ok(Self {
            spec: pcm,
            frames,
            data,
        })
    }

    pub fn spec(&self) -> &PcmSpec {
        &self.spec
    }

    /// Total number of whole frames in the stream.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw bytes for up to `count` frames starting at `start`, clamped to
    /// the end of the stream. Short reads return whatever is available.
    pub fn read_frames(&self, start: u64, count: u64) -> &[u8] {
        let frame_size = self.spec.frame_size() as u64;
        let begin = start.min(self.frames) * frame_size;
        let end = start.saturating_add(count).min(self.frames) * frame_size;
        &self.data[begin as usize..end as usize]
    }

    /// The whole data chunk as raw interleaved frames.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Write `bytes`, whole mono frames of `spec`'s sample width, as a new WAV
/// clip keeping the source sample width and rate. Samples pass through as
/// sign-extended integers, so the emitted data bytes equal the source
/// bytes.
pub fn write_clip<P: AsRef<Path>>(path: P, spec: &PcmSpec, bytes: &[u8]) -> Result<(), AudioError> {
    let width = spec.sample_width as usize;
    let out_spec = WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.sample_width * 8,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path.as_ref(), out_spec)?;
    for sample in bytes.chunks_exact(width) {
        writer.write_sample(sample_from_le_bytes(sample) as i32)?;
    }
    writer.finalize()?;

    debug!(
        "Wrote clip {} ({} samples)",
        path.as_ref().display(),
        bytes.len() / width
    );
    Ok(())
}
