//! Sound subsystem API

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("no audio device available")]
    NoDevice,
}

/// Device parameters the mixer is opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerConfig {
    pub sample_rate: u32,
    pub buffer_size: usize,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            sample_rate: crate::SAMPLE_RATE_HIGH,
            buffer_size: 1024,
        }
    }
}

/// The game's mixer.
///
/// Sound effects and music share one device: it is opened when the first
/// channel turns on and closed when the last one turns off.
pub trait SoundSystem {
    /// Open the device with `config`
    fn init(&mut self, config: MixerConfig) -> Result<(), AudioError>;

    fn close(&mut self);

    fn stop_sound(&mut self);

    fn stop_music(&mut self);

    fn play_music(&mut self);

    /// Volume in 0..=128
    fn set_sound_volume(&mut self, volume: i32);

    /// Volume in 0..=128
    fn set_music_volume(&mut self, volume: i32);

    /// Close and reopen the device with new parameters
    fn reset(&mut self, config: MixerConfig) -> Result<(), AudioError> {
        self.close();
        self.init(config)
    }
}
