/// Interface to the external decode/render pipeline.
///
/// A frame source hands the encoder a finite, fixed-shape view of decoded
/// audio: per-channel float samples at a known rate. `PcmBuffer` is the
/// canonical implementation; pipelines with their own buffer layout can
/// implement this directly and skip the copy.
///
/// Contract: the shape (`sample_rate`, `channel_count`, `frame_count`) must
/// not change while the encoder runs, and `sample` must be defined for every
/// `(channel, frame)` pair inside that shape. A source that violates this is
/// a precondition violation, not a recoverable error.
pub trait FrameSource {
    /// Samples per second for one channel.
    fn sample_rate(&self) -> u32;

    /// Number of channels (≥ 1 for a well-formed source).
    fn channel_count(&self) -> u16;

    /// Number of per-channel samples, not counting channel multiplicity.
    fn frame_count(&self) -> usize;

    /// Sample at `(channel, frame)`, nominally in `[-1.0, 1.0]`.
    ///
    /// Out-of-range values are legal; the encoder clamps them.
    fn sample(&self, channel: u16, frame: usize) -> f32;
}
