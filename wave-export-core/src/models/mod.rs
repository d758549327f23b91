pub mod error;
pub mod metadata;
pub mod pcm_buffer;
