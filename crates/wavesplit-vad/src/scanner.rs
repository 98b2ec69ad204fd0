use wavesplit_foundation::{AppError, PcmSpec};

use crate::config::ScanConfig;
use crate::decode::{decode_block, validate_spec};
use crate::energy::BlockClassifier;
use crate::state::SegmentTracker;
use crate::types::Segment;

/// Single-pass, fixed-step segmenter over a raw PCM byte stream.
///
/// The stream is walked in steps of `block_frames`; each block is decoded,
/// classified, and fed to a [`SegmentTracker`]. The step size never
/// shrinks, so a short final block still advances the cursor by the full
/// block and the loop always terminates.
pub struct SegmentScanner {
    config: ScanConfig,
}

impl SegmentScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Collect the active frame ranges of `data`, which holds whole
    /// interleaved frames of `spec`'s layout. A trailing partial frame is
    /// ignored. The scan is deterministic and performs no I/O; running it
    /// twice over the same input yields the same list.
    pub fn scan(&self, data: &[u8], spec: &PcmSpec) -> Result<Vec<Segment>, AppError> {
        self.config.validate()?;
        validate_spec(spec)?;

        let frame_size = spec.frame_size() as u64;
        let total_frames = data.len() as u64 / frame_size;
        let eof = total_frames.saturating_sub(1);
        let block_frames = self.config.block_frames;
        let classifier = BlockClassifier::new(self.config.threshold);

        let mut tracker = SegmentTracker::new();
        let mut cursor = 0u64;
        let mut active = false;
        while cursor < eof {
            let begin = cursor * frame_size;
            let end = ((cursor + block_frames) * frame_size).min(data.len() as u64);
            let block = decode_block(&data[begin as usize..end as usize], spec)?;
            // An empty block carries no verdict; the previous one stands.
            active = classifier.classify(&block).unwrap_or(active);
            tracker.advance(active, cursor);
            cursor += block_frames;
        }
        Ok(tracker.finish(eof))
    }
}
