//! Typed preference accessors
//!
//! Every preference is a string in the [`PreferenceStore`]; this module owns
//! the key names, defaults and clamping rules. Setters here only write the
//! store. Applying a value to a running display or mixer is the caller's job.

use serde::{Deserialize, Serialize};

use crate::store::PreferenceStore;

/// Preference keys
pub mod keys {
    pub const TURBO: &str = "turbo";
    pub const GRID: &str = "grid";
    pub const FULLSCREEN: &str = "fullscreen";
    pub const X_RESOLUTION: &str = "xresolution";
    pub const Y_RESOLUTION: &str = "yresolution";
    pub const X_WINDOW_SIZE: &str = "xwindowsize";
    pub const Y_WINDOW_SIZE: &str = "ywindowsize";
    pub const ADJUST_GAMMA: &str = "adjust_gamma";
    pub const GAMMA: &str = "gamma";
    pub const COLOUR_CURSORS: &str = "colour_cursors";
    pub const SHOW_AI_MOVES: &str = "show_ai_moves";
    pub const FLOATING_LABELS: &str = "floating_labels";
    pub const TURN_DIALOG: &str = "turn_dialog";
    pub const TURN_BELL: &str = "turn_bell";
    pub const SHOW_SIDE_COLOURS: &str = "show_side_colours";
    pub const SHOW_HALOES: &str = "show_haloes";
    pub const FLIP_TIME: &str = "flip_time";
    pub const SOUND: &str = "sound";
    pub const MUSIC: &str = "music";
    pub const SOUND_VOLUME: &str = "sound_volume";
    pub const MUSIC_VOLUME: &str = "music_volume";
    pub const SCROLL: &str = "scroll";
    pub const SAMPLE_RATE: &str = "sample_rate";
    pub const SOUND_BUFFER_SIZE: &str = "sound_buffer_size";
}

pub const DEFAULT_RESOLUTION: Resolution = Resolution {
    width: 1024,
    height: 768,
};
pub const DEFAULT_GAMMA: i32 = 100;
pub const GAMMA_RANGE: (i32, i32) = (50, 200);
pub const DEFAULT_VOLUME: i32 = 100;
pub const VOLUME_RANGE: (i32, i32) = (0, 128);
pub const DEFAULT_SCROLL_SPEED: i32 = 50;
pub const SCROLL_RANGE: (i32, i32) = (1, 100);
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Screen or window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn yes_no(on: bool) -> &'static str {
    if on {
        "yes"
    } else {
        "no"
    }
}

impl PreferenceStore {
    /// `true` only when the key is explicitly `"yes"`
    fn flag_opt_in(&self, key: &str) -> bool {
        self.get(key) == "yes"
    }

    /// `true` unless the key is explicitly `"no"`
    fn flag_opt_out(&self, key: &str) -> bool {
        self.get(key) != "no"
    }

    fn set_flag(&mut self, key: &str, on: bool) {
        self.set(key, yes_no(on));
    }

    fn int_or(&self, key: &str, default: i32, (min, max): (i32, i32)) -> i32 {
        self.get(key)
            .trim()
            .parse::<i32>()
            .unwrap_or(default)
            .clamp(min, max)
    }

    pub fn turbo(&self) -> bool {
        self.flag_opt_in(keys::TURBO)
    }

    pub fn set_turbo(&mut self, on: bool) {
        self.set_flag(keys::TURBO, on);
    }

    pub fn grid(&self) -> bool {
        self.flag_opt_in(keys::GRID)
    }

    pub fn set_grid(&mut self, on: bool) {
        self.set_flag(keys::GRID, on);
    }

    pub fn fullscreen(&self) -> bool {
        self.flag_opt_in(keys::FULLSCREEN)
    }

    pub fn set_fullscreen(&mut self, on: bool) {
        self.set_flag(keys::FULLSCREEN, on);
    }

    /// Resolution for the current mode: the fullscreen resolution when
    /// fullscreen is on, the window size otherwise.
    pub fn resolution(&self) -> Resolution {
        let (x_key, y_key) = self.resolution_keys();
        let x = self.get(x_key).trim().parse::<u32>();
        let y = self.get(y_key).trim().parse::<u32>();
        match (x, y) {
            (Ok(width), Ok(height)) if width > 0 && height > 0 => Resolution { width, height },
            _ => DEFAULT_RESOLUTION,
        }
    }

    /// Store `res` under the key pair of the current mode.
    pub fn set_resolution(&mut self, res: Resolution) {
        let (x_key, y_key) = self.resolution_keys();
        self.set(x_key, res.width.to_string());
        self.set(y_key, res.height.to_string());
    }

    fn resolution_keys(&self) -> (&'static str, &'static str) {
        if self.fullscreen() {
            (keys::X_RESOLUTION, keys::Y_RESOLUTION)
        } else {
            (keys::X_WINDOW_SIZE, keys::Y_WINDOW_SIZE)
        }
    }

    pub fn adjust_gamma(&self) -> bool {
        self.flag_opt_in(keys::ADJUST_GAMMA)
    }

    pub fn set_adjust_gamma(&mut self, on: bool) {
        self.set_flag(keys::ADJUST_GAMMA, on);
    }

    pub fn gamma(&self) -> i32 {
        self.int_or(keys::GAMMA, DEFAULT_GAMMA, GAMMA_RANGE)
    }

    pub fn set_gamma(&mut self, gamma: i32) {
        self.set(keys::GAMMA, gamma.to_string());
    }

    pub fn colour_cursors(&self) -> bool {
        self.flag_opt_in(keys::COLOUR_CURSORS)
    }

    pub fn set_colour_cursors(&mut self, on: bool) {
        self.set_flag(keys::COLOUR_CURSORS, on);
    }

    pub fn show_ai_moves(&self) -> bool {
        self.flag_opt_out(keys::SHOW_AI_MOVES)
    }

    pub fn set_show_ai_moves(&mut self, on: bool) {
        self.set_flag(keys::SHOW_AI_MOVES, on);
    }

    pub fn show_floating_labels(&self) -> bool {
        self.flag_opt_out(keys::FLOATING_LABELS)
    }

    pub fn set_show_floating_labels(&mut self, on: bool) {
        self.set_flag(keys::FLOATING_LABELS, on);
    }

    pub fn turn_dialog(&self) -> bool {
        self.flag_opt_in(keys::TURN_DIALOG)
    }

    pub fn set_turn_dialog(&mut self, on: bool) {
        self.set_flag(keys::TURN_DIALOG, on);
    }

    pub fn turn_bell(&self) -> bool {
        self.flag_opt_in(keys::TURN_BELL)
    }

    pub fn set_turn_bell(&mut self, on: bool) {
        self.set_flag(keys::TURN_BELL, on);
    }

    pub fn show_side_colours(&self) -> bool {
        self.flag_opt_out(keys::SHOW_SIDE_COLOURS)
    }

    pub fn set_show_side_colours(&mut self, on: bool) {
        self.set_flag(keys::SHOW_SIDE_COLOURS, on);
    }

    pub fn show_haloes(&self) -> bool {
        self.flag_opt_out(keys::SHOW_HALOES)
    }

    pub fn set_show_haloes(&mut self, on: bool) {
        self.set_flag(keys::SHOW_HALOES, on);
    }

    pub fn flip_time(&self) -> bool {
        self.flag_opt_in(keys::FLIP_TIME)
    }

    pub fn set_flip_time(&mut self, on: bool) {
        self.set_flag(keys::FLIP_TIME, on);
    }

    pub fn sound_on(&self) -> bool {
        self.flag_opt_out(keys::SOUND)
    }

    pub fn set_sound_on(&mut self, on: bool) {
        self.set_flag(keys::SOUND, on);
    }

    pub fn music_on(&self) -> bool {
        self.flag_opt_out(keys::MUSIC)
    }

    pub fn set_music_on(&mut self, on: bool) {
        self.set_flag(keys::MUSIC, on);
    }

    pub fn sound_volume(&self) -> i32 {
        self.int_or(keys::SOUND_VOLUME, DEFAULT_VOLUME, VOLUME_RANGE)
    }

    pub fn set_sound_volume(&mut self, vol: i32) {
        self.set(keys::SOUND_VOLUME, vol.to_string());
    }

    pub fn music_volume(&self) -> i32 {
        self.int_or(keys::MUSIC_VOLUME, DEFAULT_VOLUME, VOLUME_RANGE)
    }

    pub fn set_music_volume(&mut self, vol: i32) {
        self.set(keys::MUSIC_VOLUME, vol.to_string());
    }

    pub fn scroll_speed(&self) -> i32 {
        self.int_or(keys::SCROLL, DEFAULT_SCROLL_SPEED, SCROLL_RANGE)
    }

    pub fn set_scroll_speed(&mut self, speed: i32) {
        self.set(keys::SCROLL, speed.to_string());
    }

    pub fn sample_rate(&self) -> u32 {
        match self.get(keys::SAMPLE_RATE).trim().parse::<u32>() {
            Ok(rate) if rate > 0 => rate,
            _ => DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn set_sample_rate(&mut self, rate: u32) {
        self.set(keys::SAMPLE_RATE, rate.to_string());
    }

    pub fn sound_buffer_size(&self) -> usize {
        match self.get(keys::SOUND_BUFFER_SIZE).trim().parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn set_sound_buffer_size(&mut self, size: usize) {
        self.set(keys::SOUND_BUFFER_SIZE, size.to_string());
    }
}

/// Snapshot of the preferences the engine applies at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub graphics: GraphicsSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicsSettings {
    pub resolution: Resolution,
    pub fullscreen: bool,
    pub adjust_gamma: bool,
    pub gamma: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub sound: bool,
    pub music: bool,
    pub sound_volume: i32,
    pub music_volume: i32,
    pub sample_rate: u32,
    pub buffer_size: usize,
}

impl Settings {
    pub fn from_store(store: &PreferenceStore) -> Self {
        Self {
            graphics: GraphicsSettings {
                resolution: store.resolution(),
                fullscreen: store.fullscreen(),
                adjust_gamma: store.adjust_gamma(),
                gamma: store.gamma(),
            },
            audio: AudioSettings {
                sound: store.sound_on(),
                music: store.music_on(),
                sound_volume: store.sound_volume(),
                music_volume: store.music_volume(),
                sample_rate: store.sample_rate(),
                buffer_size: store.sound_buffer_size(),
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_store(&PreferenceStore::new())
    }
}
