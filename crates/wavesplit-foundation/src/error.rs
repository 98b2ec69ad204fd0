use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Input must be mono, got {channels} channels")]
    NotMono { channels: u16 },

    #[error("Unsupported channel layout: {channels} channels")]
    UnsupportedChannelLayout { channels: u16 },

    #[error("Unsupported sample width: {bytes} bytes per sample")]
    UnsupportedSampleWidth { bytes: u16 },

    #[error("Format not supported: {format}")]
    FormatNotSupported { format: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
