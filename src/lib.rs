//! Convert mono 22050 Hz 8-bit WAV audio to a raw 1-bit-per-sample stream
//! and back.
//!
//! The packed stream has no header: 8 samples per byte, most significant bit
//! first, a set bit meaning the source sample was above the 0x80 midpoint.

pub mod bits;
pub mod bytes;
pub mod error;
pub mod pcm;
pub mod wav;

pub use error::{Error, FormatError, Result};
pub use pcm::encode;
pub use wav::decode;

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    pub fn from_decompress_flag(decompress: bool) -> Self {
        if decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }

    pub fn apply(self, input: &[u8]) -> std::result::Result<Vec<u8>, FormatError> {
        match self {
            Mode::Compress => decode(input),
            Mode::Decompress => Ok(encode(input)),
        }
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!("Reading {}", path.display());
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!("Read {} bytes", data.len());
    Ok(data)
}

/// Write `data` to a temporary file next to `path`, then rename it into place.
/// A failed write leaves `path` untouched.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    debug!("Writing {} bytes to {}", data.len(), path.display());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    file.write_all(data).map_err(|e| Error::io(path, e))?;
    file.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

/// Read `input`, convert it, and write the result to `output`.
///
/// Nothing is written unless the conversion succeeds.
pub fn convert_file(mode: Mode, input: &Path, output: &Path) -> Result<()> {
    let data = read_file(input)?;
    let converted = mode.apply(&data)?;
    write_file(output, &converted)
}
