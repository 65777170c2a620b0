//! Interoperability tests against WAV files written and read by hound

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use pcm::{decode, encode, FormatError};
use std::io::Cursor;

fn spec(channels: u16, sample_rate: u32, bits_per_sample: u16) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

/// Write 8-bit samples through hound. hound stores i8 with a +128 offset,
/// so 0 lands on the 0x80 midpoint.
fn hound_wav_8bit(spec: WavSpec, samples: &[i8]) -> Vec<u8> {
    let mut wav_data = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut wav_data, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    wav_data.into_inner()
}

fn hound_read_8bit(wav: &[u8]) -> (WavSpec, Vec<i8>) {
    let mut reader = WavReader::new(Cursor::new(wav)).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i8>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn test_decode_hound_wav() {
    let samples = [127, -128, 127, -128, 127, -128, 127, -128, 127, 127, 127];
    let wav = hound_wav_8bit(spec(1, 22050, 8), &samples);
    assert_eq!(decode(&wav), Ok(vec![0xaa, 0xe0]));
}

#[test]
fn test_decode_threshold_at_midpoint() {
    // 0x80, 0x81, 0x7f
    let wav = hound_wav_8bit(spec(1, 22050, 8), &[0, 1, -1]);
    assert_eq!(decode(&wav), Ok(vec![0b0100_0000]));
}

#[test]
fn test_decode_rejects_unsupported_specs() {
    let stereo = hound_wav_8bit(spec(2, 22050, 8), &[0, 0]);
    assert_eq!(decode(&stereo), Err(FormatError::NotMono));

    let cd_rate = hound_wav_8bit(spec(1, 44100, 8), &[0]);
    assert_eq!(decode(&cd_rate), Err(FormatError::WrongSampleRate));

    let mut wav_data = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut wav_data, spec(1, 22050, 16)).unwrap();
        writer.write_sample(1000i16).unwrap();
        writer.finalize().unwrap();
    }
    assert_eq!(
        decode(wav_data.get_ref()),
        Err(FormatError::NotEightBit)
    );
}

#[test]
fn test_encoded_wav_is_readable_by_hound() {
    let wav = encode(&[0xaa, 0x0f]);
    let (read_spec, samples) = hound_read_8bit(&wav);

    assert_eq!(read_spec, spec(1, 22050, 8));
    assert_eq!(
        samples,
        vec![
            127, -128, 127, -128, 127, -128, 127, -128, //
            -128, -128, -128, -128, 127, 127, 127, 127,
        ]
    );
}

#[test]
fn test_empty_stream_is_readable_by_hound() {
    let wav = encode(&[]);
    let (_, samples) = hound_read_8bit(&wav);
    assert!(samples.is_empty());
}

#[test]
fn test_roundtrip_full_scale_multiple_of_eight() {
    let samples: Vec<i8> = (0..64)
        .map(|i| if (i * 7) % 5 < 2 { 127 } else { -128 })
        .collect();
    let wav = hound_wav_8bit(spec(1, 22050, 8), &samples);

    let packed = decode(&wav).unwrap();
    assert_eq!(packed.len(), 8);

    let (_, restored) = hound_read_8bit(&encode(&packed));
    assert_eq!(restored, samples);
}
