//! Live preference controller
//!
//! [`Preferences`] owns the preference store together with the subsystems a
//! preference can affect while the game runs. Setters write the store and,
//! where it makes sense, push the new value straight to the display, the
//! mixer or the cursor.

use std::ops::{Deref, DerefMut};

use skirmish_audio::{MixerConfig, NullSound, SoundSystem};
use skirmish_core::{Identity, Translate};
use skirmish_render::{CursorControl, GameDisplay, NullCursor, WindowMode, PREFERRED_BPP};
use skirmish_services::settings::Resolution;
use skirmish_services::PreferenceStore;

/// Shown when neither the requested nor the fallback mode can be set
pub const VIDEO_MODE_MESSAGE: &str = "The video mode could not be changed. Your window manager \
must be set to 16 bits per pixel to run the game in windowed mode. Your display must support \
1024x768x16 to run the game full screen.";

/// Mode tried when the stored resolution is unavailable after a fullscreen toggle
pub const FALLBACK_RESOLUTION: Resolution = Resolution::new(1024, 768);

/// What a video preference change did to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// No display attached; only the preference was written
    Stored,
    /// The display already was in the requested state
    Unchanged,
    /// The requested mode is now active
    Applied,
    /// The stored resolution was unavailable; the fallback mode is active
    FellBack,
    /// Nothing could be set; the player was told
    Rejected,
}

/// Try `res` in `mode` at the game's preferred depth and repaint on success.
fn switch_mode(display: &mut dyn GameDisplay, res: Resolution, mode: WindowMode) -> bool {
    let video = display.video();
    let Some(bpp) = video.mode_possible(res.width, res.height, PREFERRED_BPP, mode) else {
        return false;
    };
    if let Err(err) = video.set_mode(res.width, res.height, bpp, mode) {
        tracing::warn!("Mode {} {} reported possible but failed: {}", res, mode, err);
        return false;
    }
    display.redraw_everything();
    true
}

pub struct Preferences {
    store: PreferenceStore,
    display: Option<Box<dyn GameDisplay>>,
    sound: Box<dyn SoundSystem>,
    cursor: Box<dyn CursorControl>,
    tr: Box<dyn Translate>,
}

impl Preferences {
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            store,
            display: None,
            sound: Box::new(NullSound::new()),
            cursor: Box::new(NullCursor::default()),
            tr: Box::new(Identity),
        }
    }

    pub fn with_sound(mut self, sound: Box<dyn SoundSystem>) -> Self {
        self.sound = sound;
        self
    }

    pub fn with_cursor(mut self, cursor: Box<dyn CursorControl>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_translator(mut self, tr: Box<dyn Translate>) -> Self {
        self.tr = tr;
        self
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PreferenceStore {
        &mut self.store
    }

    pub fn into_store(self) -> PreferenceStore {
        self.store
    }

    pub fn translator(&self) -> &dyn Translate {
        self.tr.as_ref()
    }

    pub fn tr(&self, msgid: &str) -> String {
        self.tr.gettext(msgid)
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// Attach the running display and bring it in line with the stored
    /// preferences.
    pub fn attach_display(&mut self, mut display: Box<dyn GameDisplay>) {
        display.load_hotkeys(&self.store);
        self.display = Some(display);

        self.set_grid(self.store.grid());
        self.set_turbo(self.store.turbo());
        self.set_fullscreen(self.store.fullscreen());
        self.set_gamma(self.store.gamma());
        self.set_colour_cursors(self.store.colour_cursors());
        tracing::info!("Display attached to preferences");
    }

    pub fn detach_display(&mut self) -> Option<Box<dyn GameDisplay>> {
        self.display.take()
    }

    fn mixer_config(&self) -> MixerConfig {
        MixerConfig {
            sample_rate: self.store.sample_rate(),
            buffer_size: self.store.sound_buffer_size(),
        }
    }

    pub fn set_fullscreen(&mut self, on: bool) -> ModeChange {
        self.store.set_fullscreen(on);

        let res = self.store.resolution();
        let mode = WindowMode::from_fullscreen(on);
        let Some(display) = self.display.as_deref_mut() else {
            return ModeChange::Stored;
        };
        if display.video().is_fullscreen() == on {
            return ModeChange::Unchanged;
        }

        if switch_mode(display, res, mode) {
            return ModeChange::Applied;
        }
        let fallback_possible = display
            .video()
            .mode_possible(
                FALLBACK_RESOLUTION.width,
                FALLBACK_RESOLUTION.height,
                PREFERRED_BPP,
                mode,
            )
            .is_some();
        if fallback_possible {
            tracing::info!("{} unavailable {}, falling back to {}", res, mode, FALLBACK_RESOLUTION);
            return match self.set_resolution(FALLBACK_RESOLUTION) {
                ModeChange::Applied => ModeChange::FellBack,
                other => other,
            };
        }

        display.show_message(&self.tr.gettext(VIDEO_MODE_MESSAGE));
        ModeChange::Rejected
    }

    /// Change the resolution of the current mode. A resolution the display
    /// refuses is not persisted.
    pub fn set_resolution(&mut self, res: Resolution) -> ModeChange {
        let mut outcome = ModeChange::Stored;
        if let Some(display) = self.display.as_deref_mut() {
            let mode = WindowMode::from_fullscreen(self.store.fullscreen());
            if switch_mode(display, res, mode) {
                outcome = ModeChange::Applied;
            } else {
                display.show_message(&self.tr.gettext(VIDEO_MODE_MESSAGE));
                return ModeChange::Rejected;
            }
        }

        self.store.set_resolution(res);
        outcome
    }

    pub fn set_turbo(&mut self, on: bool) {
        self.store.set_turbo(on);
        if let Some(display) = self.display.as_deref_mut() {
            display.set_turbo(on);
        }
    }

    pub fn set_grid(&mut self, on: bool) {
        self.store.set_grid(on);
        if let Some(display) = self.display.as_deref_mut() {
            display.set_grid(on);
        }
    }

    pub fn set_adjust_gamma(&mut self, on: bool) {
        // Turning adjustment off restores neutral gamma
        if !on && self.store.adjust_gamma() {
            if let Some(display) = self.display.as_deref_mut() {
                display.video().set_gamma(1.0);
            }
        }
        self.store.set_adjust_gamma(on);
    }

    pub fn set_gamma(&mut self, gamma: i32) {
        self.store.set_gamma(gamma);
        if !self.store.adjust_gamma() {
            return;
        }
        if let Some(display) = self.display.as_deref_mut() {
            display.video().set_gamma(gamma as f32 / 100.0);
        }
    }

    pub fn set_colour_cursors(&mut self, on: bool) {
        self.store.set_colour_cursors(on);
        self.cursor.use_colour(on);
    }

    /// Turn sound effects on or off. Returns `false` when the mixer could
    /// not be opened, in which case sound stays off.
    pub fn set_sound(&mut self, on: bool) -> bool {
        let was_on = self.store.sound_on();
        if on && !was_on {
            self.store.set_sound_on(true);
            if !self.store.music_on() {
                if let Err(err) = self.sound.init(self.mixer_config()) {
                    tracing::warn!("Could not enable sound: {}", err);
                    self.store.set_sound_on(false);
                    return false;
                }
            }
        } else if !on && was_on {
            self.store.set_sound_on(false);
            self.sound.stop_sound();
            if !self.store.music_on() {
                self.sound.close();
            }
        }
        true
    }

    /// Turn music on or off. Returns `false` when the mixer could not be
    /// opened, in which case music stays off.
    pub fn set_music(&mut self, on: bool) -> bool {
        let was_on = self.store.music_on();
        if on && !was_on {
            self.store.set_music_on(true);
            if !self.store.sound_on() {
                if let Err(err) = self.sound.init(self.mixer_config()) {
                    tracing::warn!("Could not enable music: {}", err);
                    self.store.set_music_on(false);
                    return false;
                }
            }
            self.sound.play_music();
        } else if !on && was_on {
            self.store.set_music_on(false);
            if self.store.sound_on() {
                self.sound.stop_music();
            } else {
                self.sound.close();
            }
        }
        true
    }

    pub fn set_sound_volume(&mut self, volume: i32) {
        self.store.set_sound_volume(volume);
        self.sound.set_sound_volume(volume);
    }

    pub fn set_music_volume(&mut self, volume: i32) {
        self.store.set_music_volume(volume);
        self.sound.set_music_volume(volume);
    }

    pub fn save_sample_rate(&mut self, rate: u32) {
        if self.store.sample_rate() == rate {
            return;
        }
        self.store.set_sample_rate(rate);
        self.reset_mixer();
    }

    pub fn save_sound_buffer_size(&mut self, size: usize) {
        if self.store.sound_buffer_size() == size {
            return;
        }
        self.store.set_sound_buffer_size(size);
        self.reset_mixer();
    }

    /// Reopen the mixer with the stored parameters if anything is playing.
    fn reset_mixer(&mut self) {
        if !self.store.sound_on() && !self.store.music_on() {
            return;
        }
        let config = self.mixer_config();
        match self.sound.reset(config) {
            Ok(()) => {
                tracing::debug!(
                    "Mixer reset to {} Hz, {} samples",
                    config.sample_rate,
                    config.buffer_size
                );
                if self.store.music_on() {
                    self.sound.play_music();
                }
            }
            Err(err) => tracing::warn!("Mixer reset failed: {}", err),
        }
    }

    pub fn set_show_ai_moves(&mut self, on: bool) {
        self.store.set_show_ai_moves(on);
    }

    pub fn set_show_floating_labels(&mut self, on: bool) {
        self.store.set_show_floating_labels(on);
    }

    pub fn set_turn_bell(&mut self, on: bool) {
        self.store.set_turn_bell(on);
    }

    pub fn set_turn_dialog(&mut self, on: bool) {
        self.store.set_turn_dialog(on);
    }

    pub fn set_show_side_colours(&mut self, on: bool) {
        self.store.set_show_side_colours(on);
    }

    pub fn set_show_haloes(&mut self, on: bool) {
        self.store.set_show_haloes(on);
    }

    pub fn set_flip_time(&mut self, on: bool) {
        self.store.set_flip_time(on);
    }

    pub fn set_scroll_speed(&mut self, speed: i32) {
        self.store.set_scroll_speed(speed);
    }
}

/// Keeps a display attached to [`Preferences`] for its lifetime.
///
/// Creating it applies the stored video, gamma and cursor preferences to the
/// display; dropping it detaches the display again.
pub struct DisplayManager<'a> {
    prefs: &'a mut Preferences,
}

impl<'a> DisplayManager<'a> {
    pub fn new(prefs: &'a mut Preferences, display: Box<dyn GameDisplay>) -> Self {
        prefs.attach_display(display);
        Self { prefs }
    }
}

impl Deref for DisplayManager<'_> {
    type Target = Preferences;

    fn deref(&self) -> &Preferences {
        self.prefs
    }
}

impl DerefMut for DisplayManager<'_> {
    fn deref_mut(&mut self) -> &mut Preferences {
        self.prefs
    }
}

impl Drop for DisplayManager<'_> {
    fn drop(&mut self) {
        self.prefs.detach_display();
        tracing::debug!("Display detached from preferences");
    }
}
