use std::fs::{self, File};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::models::error::{EncodeError, ExportError};
use crate::processing::encoder::sha256_hex;
use crate::processing::quantizer;
use crate::processing::wav_format::{self, BYTES_PER_SAMPLE, WAV_HEADER_SIZE};

/// Streaming WAV file writer.
///
/// Alternative to the in-memory `WaveEncoder` for very large signals:
/// quantized frames are appended incrementally so peak memory stays bounded
/// by the caller's chunk size, not the full signal.
///
/// Writes the 44-byte header with placeholder sizes on `open`, then rewrites
/// the RIFF chunk size and data size on `close`. Both write paths apply the
/// same quantization law, so for the same input the file on disk is
/// byte-identical to `WaveEncoder::encode`.
pub struct WaveFileWriter {
    file_path: PathBuf,
    file: Option<File>,
    sample_rate: u32,
    channels: u16,
    total_bytes_written: u64,
    is_open: bool,
}

impl WaveFileWriter {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: None,
            sample_rate: 0,
            channels: 0,
            total_bytes_written: 0,
            is_open: false,
        }
    }

    /// Open the file and write the initial 44-byte WAV header.
    ///
    /// Size fields hold a zero placeholder until `close` rewrites the header.
    pub fn open(&mut self, sample_rate: u32, channels: u16) -> Result<(), ExportError> {
        if self.is_open {
            return Ok(());
        }
        if channels == 0 {
            return Err(EncodeError::NoChannels.into());
        }
        if sample_rate == 0 {
            return Err(EncodeError::ZeroSampleRate.into());
        }
        if channels as u32 * BYTES_PER_SAMPLE as u32 > u16::MAX as u32 {
            return Err(EncodeError::TooManyChannels {
                channels: channels as usize,
            }
            .into());
        }
        let byte_rate = sample_rate as u64 * channels as u64 * BYTES_PER_SAMPLE as u64;
        if byte_rate > u32::MAX as u64 {
            return Err(EncodeError::ByteRateTooLarge { byte_rate }.into());
        }

        // Ensure output directory exists
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ExportError::Storage(format!("failed to create directory: {}", e)))?;
        }

        let file = File::create(&self.file_path)
            .map_err(|e| ExportError::Storage(format!("failed to create file: {}", e)))?;

        self.file = Some(file);
        self.sample_rate = sample_rate;
        self.channels = channels;

        let header = wav_format::generate_wav_header(
            sample_rate,
            channels,
            0, // data size placeholder — header is rewritten on close
        );

        self.write_raw(&header)?;
        self.is_open = true;
        Ok(())
    }

    /// Quantize and append interleaved frames `[c0f0, c1f0, c0f1, ...]`.
    ///
    /// `samples.len()` must be a whole number of frames for the channel
    /// count given at `open`.
    pub fn write_frames(&mut self, samples: &[f32]) -> Result<(), ExportError> {
        if !self.is_open {
            return Err(ExportError::Storage("file is not open for writing".into()));
        }

        let channels = self.channels as usize;
        if samples.len() % channels != 0 {
            let frames = samples.len() / channels;
            return Err(EncodeError::ChannelLengthMismatch {
                channel: channels - 1,
                expected: frames + 1,
                actual: frames,
            }
            .into());
        }

        let data_size =
            self.total_bytes_written - WAV_HEADER_SIZE as u64 + (samples.len() * BYTES_PER_SAMPLE) as u64;
        if data_size + 36 > u32::MAX as u64 {
            return Err(EncodeError::DataTooLarge { data_size }.into());
        }

        self.write_raw(&quantizer::pcm16_bytes(samples))
    }

    /// Finalize the file: rewrite the header with final sizes, flush,
    /// compute SHA-256.
    ///
    /// Returns the hex checksum of the completed file.
    pub fn close(&mut self) -> Result<String, ExportError> {
        if !self.is_open {
            return Err(ExportError::Storage("file is not open".into()));
        }

        let file = self.file.as_mut().ok_or_else(|| ExportError::Storage("file is not open".into()))?;
        let data_size = self.total_bytes_written - WAV_HEADER_SIZE as u64;

        // Replace the placeholder header with one carrying the real sizes
        let header = wav_format::generate_wav_header(self.sample_rate, self.channels, data_size as u32);
        file.seek(SeekFrom::Start(0))
            .map_err(|e| ExportError::Storage(e.to_string()))?;
        file.write_all(&header)
            .map_err(|e| ExportError::Storage(e.to_string()))?;

        file.flush().map_err(|e| ExportError::Storage(e.to_string()))?;
        self.file = None;
        self.is_open = false;

        let checksum = sha256_file(&self.file_path)?;
        log::debug!(
            "finalized {} ({} bytes, sha256 {})",
            self.file_path.display(),
            self.total_bytes_written,
            checksum
        );
        Ok(checksum)
    }

    /// Total bytes written so far (including WAV header).
    pub fn bytes_written(&self) -> u64 {
        self.total_bytes_written
    }

    /// Path of the output file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<(), ExportError> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| ExportError::Storage("file is not open".into()))?;
        file.write_all(data)
            .map_err(|e| ExportError::Storage(format!("write failed: {}", e)))?;
        self.total_bytes_written += data.len() as u64;
        Ok(())
    }
}

/// Compute SHA-256 hex digest of a file.
fn sha256_file(path: &Path) -> Result<String, ExportError> {
    let data = fs::read(path)
        .map_err(|e| ExportError::Storage(format!("failed to read file for checksum: {}", e)))?;
    Ok(sha256_hex(&data))
}
