//! # wave-export-core
//!
//! Platform-agnostic WAV export core library.
//!
//! Turns a decoded multi-channel float signal into a byte-exact RIFF/WAVE
//! file: 44-byte header, interleaved 16-bit little-endian PCM body. The
//! decode/render pipeline that produces the float signal is an external
//! collaborator behind the `FrameSource` trait; this crate only serializes.
//!
//! ## Architecture
//!
//! ```text
//! wave-export-core (this crate)
//! ├── traits/       ← FrameSource (seam to the external decode/render pipeline)
//! ├── models/       ← PcmBuffer, EncodeError, ExportError, WaveMetadata
//! ├── processing/   ← WAV header layout, 16-bit quantization, WaveEncoder
//! └── storage/      ← WaveFileWriter (streaming file sink), metadata sidecar
//! ```
//!
//! ## Quantization policy
//!
//! One canonical law everywhere: clamp to `[-1.0, 1.0]`, scale negatives by
//! 32768 and positives by 32767, truncate toward zero. Full-scale input maps
//! to exactly -32768 / 32767 and no sample can overflow the 16-bit range.

pub mod models;
pub mod processing;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::error::{EncodeError, ExportError};
pub use models::metadata::WaveMetadata;
pub use models::pcm_buffer::PcmBuffer;
pub use processing::encoder::{WaveEncoder, WaveFile};
pub use storage::wave_writer::WaveFileWriter;
pub use traits::frame_source::FrameSource;
