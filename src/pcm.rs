//! Packed 1-bit PCM back to a canonical WAV.

use crate::bits::unpack_samples;
use crate::wav::{
    BITS_PER_SAMPLE, CHANNELS, DATA_ID, FMT_ID, PCM_FORMAT, RIFF_ID, SAMPLE_RATE, WAVE_ID,
};
use tracing::debug;

pub const HEADER_LEN: usize = 44;

const FMT_CHUNK_LEN: u32 = 16;
const BLOCK_ALIGN: u16 = 1;

// RIFF size fields are 32-bit; larger streams wrap
pub fn write_header(out: &mut Vec<u8>, num_samples: usize) {
    let data_len = num_samples as u32;
    let riff_len = (HEADER_LEN as u32 - 8).wrapping_add(data_len);
    let byte_rate = SAMPLE_RATE * u32::from(BLOCK_ALIGN);

    out.extend_from_slice(&RIFF_ID);
    out.extend_from_slice(&riff_len.to_le_bytes());
    out.extend_from_slice(&WAVE_ID);
    out.extend_from_slice(&FMT_ID);
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&PCM_FORMAT.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    out.extend_from_slice(&DATA_ID);
    out.extend_from_slice(&data_len.to_le_bytes());
}

/// Wrap packed bits in a WAV, 8 full-scale samples per input byte.
///
/// Every input byte expands to exactly 8 samples, so padding bits from a
/// partial final group come back as `0x00` samples.
pub fn encode(packed: &[u8]) -> Vec<u8> {
    let samples = unpack_samples(packed);
    debug!(
        "Expanding {} packed bytes to {} samples",
        packed.len(),
        samples.len()
    );

    let mut wav = Vec::with_capacity(HEADER_LEN + samples.len());
    write_header(&mut wav, samples.len());
    wav.extend_from_slice(&samples);
    wav
}
