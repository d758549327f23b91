use thiserror::Error;

/// Structural precondition violations detected on the pure encoding path.
///
/// These are the only failures encoding itself can produce. The encoder
/// never emits a header whose declared sizes disagree with the payload, so
/// a buffer that cannot be represented is rejected up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("buffer has no channels")]
    NoChannels,

    #[error("sample rate must be positive")]
    ZeroSampleRate,

    #[error("channel {channel} has {actual} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    #[error("channel count {channels} does not fit a WAV header")]
    TooManyChannels { channels: usize },

    #[error("derived byte rate {byte_rate} does not fit a RIFF header field")]
    ByteRateTooLarge { byte_rate: u64 },

    #[error("PCM payload of {data_size} bytes does not fit a RIFF size field")]
    DataTooLarge { data_size: u64 },
}

/// Caller-facing taxonomy for a full decode → render → encode export.
///
/// Distinguishes where an export went wrong instead of collapsing every
/// failure into one opaque flag. Decode and render failures originate in
/// external collaborators; their message is carried as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("render failed: {0}")]
    RenderFailed(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("storage error: {0}")]
    Storage(String),
}
