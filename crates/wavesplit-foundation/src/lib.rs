pub mod error;
pub mod pcm;

pub use error::*;
pub use pcm::*;
