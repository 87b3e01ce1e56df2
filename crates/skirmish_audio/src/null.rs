//! Mixer that plays nothing

use crate::mixer::{AudioError, MixerConfig, SoundSystem};

/// Silent mixer that tracks what a real device would be doing
#[derive(Debug, Clone, Default)]
pub struct NullSound {
    open: Option<MixerConfig>,
    music_playing: bool,
    sound_volume: i32,
    music_volume: i32,
    /// Refuse to open, simulating a machine without audio
    unavailable: bool,
}

impl NullSound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn config(&self) -> Option<MixerConfig> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn volumes(&self) -> (i32, i32) {
        (self.sound_volume, self.music_volume)
    }
}

impl SoundSystem for NullSound {
    fn init(&mut self, config: MixerConfig) -> Result<(), AudioError> {
        if self.unavailable {
            return Err(AudioError::NoDevice);
        }
        tracing::debug!(
            "Null mixer opened at {} Hz, {} samples",
            config.sample_rate,
            config.buffer_size
        );
        self.open = Some(config);
        Ok(())
    }

    fn close(&mut self) {
        self.open = None;
        self.music_playing = false;
    }

    fn stop_sound(&mut self) {}

    fn stop_music(&mut self) {
        self.music_playing = false;
    }

    fn play_music(&mut self) {
        self.music_playing = self.open.is_some();
    }

    fn set_sound_volume(&mut self, volume: i32) {
        self.sound_volume = volume;
    }

    fn set_music_volume(&mut self, volume: i32) {
        self.music_volume = volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_reopens_with_new_config() {
        let mut mixer = NullSound::new();
        mixer.init(MixerConfig::default()).unwrap();
        mixer.play_music();
        assert!(mixer.music_playing());

        let config = MixerConfig {
            sample_rate: 22050,
            buffer_size: 2048,
        };
        mixer.reset(config).unwrap();
        assert_eq!(mixer.config(), Some(config));
        assert!(!mixer.music_playing());
    }

    #[test]
    fn unavailable_device_fails_to_open() {
        let mut mixer = NullSound::unavailable();
        assert_eq!(mixer.init(MixerConfig::default()), Err(AudioError::NoDevice));
        assert!(!mixer.is_open());
    }
}
