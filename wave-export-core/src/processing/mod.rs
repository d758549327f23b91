pub mod encoder;
pub mod quantizer;
pub mod wav_format;
