pub mod wav;

pub use wav::{write_clip, WavFile};
