use crate::models::error::EncodeError;
use crate::traits::frame_source::FrameSource;

/// Finite, planar multi-channel float sample buffer.
///
/// Holds one `Vec<f32>` per channel, all the same length. The shape is
/// validated at construction and fixed for the buffer's lifetime, so the
/// encoder can trust it without re-checking per frame.
///
/// Samples are nominally in `[-1.0, 1.0]`. Out-of-range values are legal
/// input and are clamped during quantization, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl PcmBuffer {
    /// Build a buffer from planar channel data.
    ///
    /// Every channel must have the same length; `frame_count` is taken from
    /// channel 0.
    pub fn from_planar(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, EncodeError> {
        if sample_rate == 0 {
            return Err(EncodeError::ZeroSampleRate);
        }
        if channels.is_empty() {
            return Err(EncodeError::NoChannels);
        }
        // channel_count() reports a u16, so the count must fit one
        if channels.len() > u16::MAX as usize {
            return Err(EncodeError::TooManyChannels {
                channels: channels.len(),
            });
        }
        let expected = channels[0].len();
        for (index, channel) in channels.iter().enumerate() {
            if channel.len() != expected {
                return Err(EncodeError::ChannelLengthMismatch {
                    channel: index,
                    expected,
                    actual: channel.len(),
                });
            }
        }
        Ok(Self { sample_rate, channels })
    }

    /// Build a buffer from interleaved samples `[c0f0, c1f0, c0f1, c1f1, ...]`.
    ///
    /// `samples.len()` must be a multiple of `channel_count`; a trailing
    /// partial frame is a length mismatch.
    pub fn from_interleaved(
        sample_rate: u32,
        channel_count: u16,
        samples: &[f32],
    ) -> Result<Self, EncodeError> {
        if channel_count == 0 {
            return Err(EncodeError::NoChannels);
        }
        let channel_count = channel_count as usize;
        if samples.len() % channel_count != 0 {
            let frames = samples.len() / channel_count;
            return Err(EncodeError::ChannelLengthMismatch {
                channel: channel_count - 1,
                expected: frames + 1,
                actual: frames,
            });
        }
        let frame_count = samples.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frame_count); channel_count];
        for frame in 0..frame_count {
            for (ch, channel) in channels.iter_mut().enumerate() {
                channel.push(samples[frame * channel_count + ch]);
            }
        }
        Self::from_planar(sample_rate, channels)
    }

    /// All-zero buffer of the given shape.
    pub fn silence(
        sample_rate: u32,
        channel_count: u16,
        frame_count: usize,
    ) -> Result<Self, EncodeError> {
        if channel_count == 0 {
            return Err(EncodeError::NoChannels);
        }
        Self::from_planar(sample_rate, vec![vec![0.0; frame_count]; channel_count as usize])
    }

    /// Samples of one channel.
    pub fn channel(&self, channel: u16) -> &[f32] {
        &self.channels[channel as usize]
    }

    /// Duration of the signal in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Whether the buffer holds zero frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}

impl FrameSource for PcmBuffer {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    fn sample(&self, channel: u16, frame: usize) -> f32 {
        self.channels[channel as usize][frame]
    }
}
