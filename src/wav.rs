//! RIFF/WAVE parsing and validation for the decode direction.

use crate::bits::pack_samples;
use crate::bytes::ByteReader;
use crate::error::FormatError;
use tracing::{debug, warn};

pub const RIFF_ID: [u8; 4] = *b"RIFF";
pub const WAVE_ID: [u8; 4] = *b"WAVE";
pub const FMT_ID: [u8; 4] = *b"fmt ";
pub const DATA_ID: [u8; 4] = *b"data";

pub const PCM_FORMAT: u16 = 1;
pub const CHANNELS: u16 = 1;
pub const SAMPLE_RATE: u32 = 22050;
pub const BITS_PER_SAMPLE: u16 = 8;

const CHUNK_HEADER_LEN: u64 = 8;

/// Parse a mono 22050 Hz 8-bit PCM WAV and pack its samples to 1 bit each.
///
/// Sub-chunks are walked in a single pass from offset 12. A `fmt ` chunk is
/// validated where it is found, unknown chunks are skipped, and the walk stops
/// at the first `data` chunk. A `data` chunk ahead of any `fmt ` chunk is
/// accepted without format validation.
pub fn decode(wav: &[u8]) -> Result<Vec<u8>, FormatError> {
    let reader = ByteReader::new(wav);

    if reader.tag(0) != Some(RIFF_ID) {
        return Err(FormatError::NotRiff);
    }
    if reader.tag(8) != Some(WAVE_ID) {
        return Err(FormatError::NotWave);
    }

    // Bounds the chunk walk, not the buffer
    let riff_end = reader.u32_le(4).map_or(0, |size| u64::from(size) + 8);
    debug!("RIFF extent {} bytes, buffer {} bytes", riff_end, wav.len());

    let mut cursor: u64 = 12;
    let mut data = None;
    while cursor < riff_end {
        let id = reader
            .tag(cursor)
            .ok_or(FormatError::TruncatedChunkHeader)?;
        let size = reader
            .u32_le(cursor + 4)
            .ok_or(FormatError::TruncatedChunkHeader)?;
        cursor += CHUNK_HEADER_LEN;

        match id {
            FMT_ID => validate_format(&reader, cursor)?,
            DATA_ID => {
                data = Some((cursor, u64::from(size)));
                break;
            }
            _ => debug!(
                "Skipping chunk {:?} ({} bytes)",
                String::from_utf8_lossy(&id),
                size
            ),
        }

        cursor += u64::from(size);
    }

    let (offset, declared) = match data {
        Some((offset, declared)) if declared > 0 => (offset, declared),
        _ => return Err(FormatError::NoSamples),
    };

    let samples = reader.slice_clamped(offset, declared);
    if (samples.len() as u64) < declared {
        warn!(
            "data chunk declares {} samples but only {} are present",
            declared,
            samples.len()
        );
    }
    if samples.is_empty() {
        return Err(FormatError::NoSamples);
    }

    debug!("Packing {} samples", samples.len());
    Ok(pack_samples(samples))
}

/// Check the `fmt ` payload starting at `fmt`. Fields that can't be read
/// count as mismatches.
fn validate_format(reader: &ByteReader<'_>, fmt: u64) -> Result<(), FormatError> {
    if reader.u16_le(fmt) != Some(PCM_FORMAT) {
        return Err(FormatError::NotPcm);
    }
    if reader.u16_le(fmt + 2) != Some(CHANNELS) {
        return Err(FormatError::NotMono);
    }
    if reader.u32_le(fmt + 4) != Some(SAMPLE_RATE) {
        return Err(FormatError::WrongSampleRate);
    }
    if reader.u16_le(fmt + 14) != Some(BITS_PER_SAMPLE) {
        return Err(FormatError::NotEightBit);
    }
    Ok(())
}
