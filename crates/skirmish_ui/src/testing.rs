//! Recording test doubles for the display, mixer and cursor seams

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use skirmish_audio::{AudioError, MixerConfig, SoundSystem};
use skirmish_render::{
    CursorControl, GameDisplay, HeadlessVideo, NullCursor, VideoBackend, VideoError, WindowMode,
};
use skirmish_services::PreferenceStore;

use crate::preferences::Preferences;

/// Handle shared between a boxed double and the test inspecting it
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

#[derive(Debug, Default)]
pub struct DisplayLog {
    pub turbo: bool,
    pub grid: bool,
    pub redraws: u32,
    pub messages: Vec<String>,
    pub gamma: Vec<f32>,
    pub modes: Vec<(u32, u32, u8, WindowMode)>,
    pub hotkey_loads: u32,
}

pub struct TestVideo {
    inner: HeadlessVideo,
    log: Shared<DisplayLog>,
}

impl VideoBackend for TestVideo {
    fn mode_possible(&self, width: u32, height: u32, bpp: u8, mode: WindowMode) -> Option<u8> {
        self.inner.mode_possible(width, height, bpp, mode)
    }

    fn set_mode(
        &mut self,
        width: u32,
        height: u32,
        bpp: u8,
        mode: WindowMode,
    ) -> Result<(), VideoError> {
        self.inner.set_mode(width, height, bpp, mode)?;
        self.log.borrow_mut().modes.push((width, height, bpp, mode));
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.inner.is_fullscreen()
    }

    fn set_gamma(&mut self, gamma: f32) {
        self.log.borrow_mut().gamma.push(gamma);
    }
}

pub struct TestDisplay {
    video: TestVideo,
    log: Shared<DisplayLog>,
}

impl TestDisplay {
    pub fn new(video: HeadlessVideo) -> (Self, Shared<DisplayLog>) {
        let log = Shared::new(DisplayLog::default());
        let display = Self {
            video: TestVideo {
                inner: video,
                log: log.clone(),
            },
            log: log.clone(),
        };
        (display, log)
    }
}

impl GameDisplay for TestDisplay {
    fn video(&mut self) -> &mut dyn VideoBackend {
        &mut self.video
    }

    fn redraw_everything(&mut self) {
        self.log.borrow_mut().redraws += 1;
    }

    fn set_turbo(&mut self, on: bool) {
        self.log.borrow_mut().turbo = on;
    }

    fn set_grid(&mut self, on: bool) {
        self.log.borrow_mut().grid = on;
    }

    fn show_message(&mut self, message: &str) {
        self.log.borrow_mut().messages.push(message.to_string());
    }

    fn load_hotkeys(&mut self, _store: &PreferenceStore) {
        self.log.borrow_mut().hotkey_loads += 1;
    }
}

impl CursorControl for Shared<NullCursor> {
    fn use_colour(&mut self, on: bool) {
        self.borrow_mut().use_colour(on);
    }
}

#[derive(Debug, Default)]
pub struct SoundLog {
    pub open: Option<MixerConfig>,
    pub inits: u32,
    pub resets: u32,
    pub music_playing: bool,
    pub volumes: (i32, i32),
    pub fail_init: bool,
}

impl SoundSystem for Shared<SoundLog> {
    fn init(&mut self, config: MixerConfig) -> Result<(), AudioError> {
        let mut log = self.borrow_mut();
        if log.fail_init {
            return Err(AudioError::NoDevice);
        }
        log.inits += 1;
        log.open = Some(config);
        Ok(())
    }

    fn close(&mut self) {
        let mut log = self.borrow_mut();
        log.open = None;
        log.music_playing = false;
    }

    fn stop_sound(&mut self) {}

    fn stop_music(&mut self) {
        self.borrow_mut().music_playing = false;
    }

    fn play_music(&mut self) {
        self.borrow_mut().music_playing = true;
    }

    fn set_sound_volume(&mut self, volume: i32) {
        self.borrow_mut().volumes.0 = volume;
    }

    fn set_music_volume(&mut self, volume: i32) {
        self.borrow_mut().volumes.1 = volume;
    }

    fn reset(&mut self, config: MixerConfig) -> Result<(), AudioError> {
        let mut log = self.borrow_mut();
        log.resets += 1;
        log.open = Some(config);
        Ok(())
    }
}

/// Preferences with a recording display (already attached) and cursor
pub fn recording_prefs(
    store: PreferenceStore,
    video: HeadlessVideo,
) -> (Preferences, Shared<DisplayLog>, Shared<NullCursor>) {
    let (display, log) = TestDisplay::new(video);
    let cursor = Shared::new(NullCursor::default());
    let mut prefs = Preferences::new(store).with_cursor(Box::new(cursor.clone()));
    prefs.attach_display(Box::new(display));
    (prefs, log, cursor)
}
