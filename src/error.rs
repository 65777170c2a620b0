//! Error types for the WAV <-> packed PCM converter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a WAV buffer is rejected by the decoder.
///
/// Checks run in a fixed order and the first failure wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("WAV file does not start with 'RIFF'")]
    NotRiff,

    #[error("RIFF chunk does not start with 'WAVE'")]
    NotWave,

    #[error("Failed to read sub-chunk size")]
    TruncatedChunkHeader,

    #[error("WAV data is not PCM format")]
    NotPcm,

    #[error("WAV data is not mono")]
    NotMono,

    #[error("WAV data is not 22050 Hz")]
    WrongSampleRate,

    #[error("WAV data is not 8-bit")]
    NotEightBit,

    #[error("WAV data has no PCM samples")]
    NoSamples,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{path}: {err}", path = .path.display())]
    Io { path: PathBuf, err: std::io::Error },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    pub fn io<P: Into<PathBuf>>(path: P, err: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            err,
        }
    }
}
