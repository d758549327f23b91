use serde::{Deserialize, Serialize};

use crate::processing::encoder::WaveFile;
use crate::traits::frame_source::FrameSource;

/// Metadata describing a completed WAV export.
///
/// Serializable for JSON export alongside the encoded bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveMetadata {
    pub id: String,
    pub created_at: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub frame_count: u64,
    pub duration_secs: f64,
    pub byte_length: u64,
    pub checksum: String,
}

impl WaveMetadata {
    /// Describe an in-memory encode of `source` into `wave`.
    pub fn for_wave_file<S: FrameSource>(wave: &WaveFile, source: &S) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            sample_rate: source.sample_rate(),
            channels: source.channel_count(),
            frame_count: source.frame_count() as u64,
            duration_secs: source.frame_count() as f64 / source.sample_rate() as f64,
            byte_length: wave.len() as u64,
            checksum: wave.checksum_sha256(),
        }
    }
}
