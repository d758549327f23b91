use sha2::{Digest, Sha256};

use crate::models::error::EncodeError;
use crate::processing::quantizer;
use crate::processing::wav_format::{self, BYTES_PER_SAMPLE, WAV_HEADER_SIZE};
use crate::traits::frame_source::FrameSource;

/// A complete, immutable RIFF/WAVE byte sequence.
///
/// Always exactly `44 + data_size` bytes: the fixed header followed by
/// interleaved 16-bit little-endian PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFile {
    bytes: Vec<u8>,
}

impl WaveFile {
    /// The full file contents, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the file, yielding its contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total file length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file carries zero PCM frames.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == WAV_HEADER_SIZE
    }

    /// Size of the data sub-chunk in bytes.
    pub fn data_size(&self) -> u32 {
        (self.bytes.len() - WAV_HEADER_SIZE) as u32
    }

    /// SHA-256 hex digest of the complete file.
    pub fn checksum_sha256(&self) -> String {
        sha256_hex(&self.bytes)
    }
}

/// SHA-256 hex digest of a byte sequence.
pub(crate) fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Serializes a frame source into a RIFF/WAVE byte sequence.
///
/// Pure and deterministic: same source in, byte-identical file out. Owns no
/// state, so independent encodes may run concurrently without coordination.
pub struct WaveEncoder;

impl WaveEncoder {
    /// Encode a frame source as a 16-bit PCM WAV file.
    ///
    /// Single pass over the source. A zero-frame source yields a valid
    /// 44-byte file with an empty data sub-chunk. Fails only on structural
    /// preconditions — a shape the header fields cannot represent.
    pub fn encode<S: FrameSource>(source: &S) -> Result<WaveFile, EncodeError> {
        let channels = source.channel_count();
        let sample_rate = source.sample_rate();
        let frame_count = source.frame_count();

        if channels == 0 {
            return Err(EncodeError::NoChannels);
        }
        if sample_rate == 0 {
            return Err(EncodeError::ZeroSampleRate);
        }

        // blockAlign = channels * 2 is a u16 field
        if channels as u32 * BYTES_PER_SAMPLE as u32 > u16::MAX as u32 {
            return Err(EncodeError::TooManyChannels {
                channels: channels as usize,
            });
        }

        // byteRate = rate * channels * 2 is a u32 field
        let byte_rate = sample_rate as u64 * channels as u64 * BYTES_PER_SAMPLE as u64;
        if byte_rate > u32::MAX as u64 {
            return Err(EncodeError::ByteRateTooLarge { byte_rate });
        }

        let data_size = frame_count as u64 * channels as u64 * BYTES_PER_SAMPLE as u64;
        if data_size + 36 > u32::MAX as u64 {
            return Err(EncodeError::DataTooLarge { data_size });
        }

        let mut bytes = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);
        bytes.extend_from_slice(&wav_format::generate_wav_header(
            sample_rate,
            channels,
            data_size as u32,
        ));

        for frame in 0..frame_count {
            for channel in 0..channels {
                let value = quantizer::quantize_sample(source.sample(channel, frame));
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }

        Ok(WaveFile { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pcm_buffer::PcmBuffer;

    fn header_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn header_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn total_length_is_header_plus_payload() {
        let buf = PcmBuffer::silence(48000, 2, 100).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        assert_eq!(wav.len(), 44 + 100 * 2 * 2);
        assert_eq!(wav.data_size(), 400);
    }

    #[test]
    fn header_fields_round_trip() {
        let buf = PcmBuffer::silence(22050, 2, 10).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();
        let bytes = wav.as_bytes();

        assert_eq!(header_u16(bytes, 22), 2);
        assert_eq!(header_u32(bytes, 24), 22050);
        assert_eq!(header_u32(bytes, 40), 40); // 10 frames * 2 ch * 2 bytes
        assert_eq!(header_u32(bytes, 4), 36 + 40);
    }

    #[test]
    fn encoding_is_deterministic() {
        let buf = PcmBuffer::from_planar(44100, vec![vec![0.1, -0.7, 0.33]]).unwrap();

        let first = WaveEncoder::encode(&buf).unwrap();
        let second = WaveEncoder::encode(&buf).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn out_of_range_samples_clamp() {
        let hot = PcmBuffer::from_planar(8000, vec![vec![2.0, -5.0]]).unwrap();
        let full = PcmBuffer::from_planar(8000, vec![vec![1.0, -1.0]]).unwrap();

        assert_eq!(
            WaveEncoder::encode(&hot).unwrap().as_bytes(),
            WaveEncoder::encode(&full).unwrap().as_bytes()
        );
    }

    #[test]
    fn silence_encodes_to_zero_payload() {
        let buf = PcmBuffer::silence(44100, 2, 50).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        assert!(wav.as_bytes()[44..].iter().all(|&b| b == 0));
    }

    #[test]
    fn mono_8khz_scenario() {
        let buf = PcmBuffer::from_planar(8000, vec![vec![0.0, 1.0]]).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();
        let bytes = wav.as_bytes();

        assert_eq!(&bytes[44..], &[0x00, 0x00, 0xFF, 0x7F]);
        assert_eq!(header_u32(bytes, 40), 4);
        assert_eq!(header_u32(bytes, 4), 40);
        assert_eq!(header_u32(bytes, 28), 16000); // byte rate
        assert_eq!(header_u16(bytes, 32), 2); // block align
    }

    #[test]
    fn stereo_interleaving_scenario() {
        let buf = PcmBuffer::from_planar(44100, vec![vec![-1.0], vec![0.5]]).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        // ch0 min negative, then ch1 = floor(0.5 * 32767) = 16383
        assert_eq!(&wav.as_bytes()[44..], &[0x00, 0x80, 0xFF, 0x3F]);
    }

    #[test]
    fn frames_interleave_in_channel_order() {
        let buf =
            PcmBuffer::from_planar(48000, vec![vec![0.0, 1.0], vec![-1.0, 0.0]]).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        // frame 0: ch0=0, ch1=-1; frame 1: ch0=1, ch1=0
        assert_eq!(
            &wav.as_bytes()[44..],
            &[0x00, 0x00, 0x00, 0x80, 0xFF, 0x7F, 0x00, 0x00]
        );
    }

    #[test]
    fn empty_buffer_yields_header_only() {
        let buf = PcmBuffer::from_planar(48000, vec![vec![]]).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        assert_eq!(wav.len(), 44);
        assert!(wav.is_empty());
        assert_eq!(header_u32(wav.as_bytes(), 40), 0);
    }

    #[test]
    fn checksum_is_stable_hex() {
        let buf = PcmBuffer::silence(8000, 1, 4).unwrap();
        let wav = WaveEncoder::encode(&buf).unwrap();

        let checksum = wav.checksum_sha256();
        assert_eq!(checksum.len(), 64);
        assert_eq!(checksum, WaveEncoder::encode(&buf).unwrap().checksum_sha256());
    }

    #[test]
    fn rejects_byte_rate_beyond_header_field() {
        // Rate fits u32 and passes construction, but rate * channels * 2 does not
        let buf = PcmBuffer::from_planar(3_000_000_000, vec![vec![0.0]]).unwrap();

        assert_eq!(
            WaveEncoder::encode(&buf).unwrap_err(),
            EncodeError::ByteRateTooLarge {
                byte_rate: 6_000_000_000,
            }
        );
    }

    #[test]
    fn rejects_block_align_beyond_header_field() {
        // 40000 channels: block align 80000 exceeds the u16 field
        let buf = PcmBuffer::from_planar(8000, vec![vec![0.0]; 40000]).unwrap();

        assert_eq!(
            WaveEncoder::encode(&buf).unwrap_err(),
            EncodeError::TooManyChannels { channels: 40000 }
        );
    }

    #[test]
    fn rejects_shapeless_sources() {
        struct NoChannelSource;
        impl crate::traits::frame_source::FrameSource for NoChannelSource {
            fn sample_rate(&self) -> u32 {
                48000
            }
            fn channel_count(&self) -> u16 {
                0
            }
            fn frame_count(&self) -> usize {
                0
            }
            fn sample(&self, _channel: u16, _frame: usize) -> f32 {
                0.0
            }
        }

        assert_eq!(
            WaveEncoder::encode(&NoChannelSource).unwrap_err(),
            EncodeError::NoChannels
        );
    }
}
