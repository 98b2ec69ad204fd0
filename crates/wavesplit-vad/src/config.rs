use serde::{Deserialize, Serialize};

use wavesplit_foundation::AppError;

/// Parameters of one segmentation pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum mean absolute normalized amplitude for a block to count as
    /// active. Equality counts as inactive.
    pub threshold: f32,

    /// Frames per scan step; also the shortest silence that closes a
    /// section.
    pub block_frames: u64,
}

impl ScanConfig {
    /// Build a config from a minimal break duration in seconds at the
    /// stream's frame rate.
    pub fn from_duration_secs(threshold: f32, duration_secs: f64, sample_rate: u32) -> Self {
        let block_frames = (duration_secs * sample_rate as f64).round() as u64;
        Self {
            threshold,
            block_frames,
        }
    }

    /// A zero-length block would make the fixed-step scan loop forever.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.block_frames == 0 {
            return Err(AppError::Config(
                "block duration must be at least one frame".into(),
            ));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(AppError::Config(
                "threshold must be a non-negative finite value".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_converts_to_frames() {
        let config = ScanConfig::from_duration_secs(0.3, 0.1, 44_100);
        assert_eq!(config.block_frames, 4_410);
        assert_eq!(config.threshold, 0.3);
    }

    #[test]
    fn duration_rounds_to_nearest_frame() {
        let config = ScanConfig::from_duration_secs(0.1, 0.5, 99);
        assert_eq!(config.block_frames, 50);
    }

    #[test]
    fn rejects_zero_length_blocks() {
        let config = ScanConfig {
            threshold: 0.1,
            block_frames: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_threshold() {
        let config = ScanConfig {
            threshold: -0.1,
            block_frames: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_zero_threshold() {
        let config = ScanConfig {
            threshold: 0.0,
            block_frames: 10,
        };
        assert!(config.validate().is_ok());
    }
}
