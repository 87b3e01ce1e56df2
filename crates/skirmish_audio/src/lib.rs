//! Skirmish Audio
//!
//! The mixer seam preference code talks to, plus the mixer parameters the
//! player can tune (sample rate and buffer size).

pub mod mixer;
pub mod null;

pub use mixer::{AudioError, MixerConfig, SoundSystem};
pub use null::NullSound;

/// Sample rate of the "low quality" preset
pub const SAMPLE_RATE_LOW: u32 = 22050;
/// Sample rate of the "CD quality" preset
pub const SAMPLE_RATE_HIGH: u32 = 44100;

/// Smallest mixer buffer, in samples
pub const BASE_BUFFER_SIZE: usize = 512;
/// Largest buffer step; buffers go 512, 1024, 2048, 4096
pub const MAX_BUFFER_STEP: i32 = 3;

/// Buffer size for a slider step: `512 << step`
pub fn buffer_size_for_step(step: i32) -> usize {
    BASE_BUFFER_SIZE << step.clamp(0, MAX_BUFFER_STEP)
}

/// Slider step for a buffer size, the inverse of [`buffer_size_for_step`].
/// Sizes between steps round down; out-of-range sizes clamp.
pub fn step_for_buffer_size(size: usize) -> i32 {
    let step = (size / BASE_BUFFER_SIZE).max(1).ilog2() as i32;
    step.min(MAX_BUFFER_STEP)
}
