// Samples strictly above the midpoint pack to 1
pub const MIDPOINT: u8 = 0x80;

pub const HIGH: u8 = 0xff;
pub const LOW: u8 = 0x00;

/// Threshold 8-bit samples into one bit each, MSB first.
///
/// A trailing group shorter than 8 samples leaves its low bits zero.
pub fn pack_samples(samples: &[u8]) -> Vec<u8> {
    samples
        .chunks(8)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (j, &sample)| {
                    byte | (u8::from(sample > MIDPOINT) << (7 - j))
                })
        })
        .collect()
}

pub fn unpack_samples(packed: &[u8]) -> Vec<u8> {
    let mut samples = Vec::with_capacity(packed.len() * 8);
    for &byte in packed {
        for j in 0..8 {
            samples.push(if byte & (0x80 >> j) != 0 { HIGH } else { LOW });
        }
    }
    samples
}
