//! Headless display
//!
//! Simulates a monitor with a fixed list of fullscreen modes and a desktop
//! that accepts any window fitting inside it. Used for batch runs and tests.

use skirmish_services::settings::Resolution;

use crate::display::GameDisplay;
use crate::video::{VideoBackend, VideoError, WindowMode};

/// A mode that is currently set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMode {
    pub resolution: Resolution,
    pub bpp: u8,
    pub mode: WindowMode,
}

#[derive(Debug, Clone)]
pub struct HeadlessVideo {
    desktop: Resolution,
    /// Colour depth of the desktop; windows inherit it. Zero disables windowed mode.
    desktop_bpp: u8,
    fullscreen_modes: Vec<(Resolution, u8)>,
    active: Option<ActiveMode>,
    gamma: f32,
}

impl HeadlessVideo {
    pub fn new(desktop: Resolution, desktop_bpp: u8) -> Self {
        Self {
            desktop,
            desktop_bpp,
            fullscreen_modes: Vec::new(),
            active: None,
            gamma: 1.0,
        }
    }

    pub fn with_fullscreen_mode(mut self, resolution: Resolution, bpp: u8) -> Self {
        self.fullscreen_modes.push((resolution, bpp));
        self
    }

    pub fn active(&self) -> Option<ActiveMode> {
        self.active
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }
}

impl Default for HeadlessVideo {
    fn default() -> Self {
        Self::new(Resolution::new(1920, 1080), 32)
            .with_fullscreen_mode(Resolution::new(1024, 768), 32)
            .with_fullscreen_mode(Resolution::new(1280, 720), 32)
            .with_fullscreen_mode(Resolution::new(1920, 1080), 32)
    }
}

impl VideoBackend for HeadlessVideo {
    fn mode_possible(&self, width: u32, height: u32, _bpp: u8, mode: WindowMode) -> Option<u8> {
        match mode {
            WindowMode::Windowed => {
                let fits = width <= self.desktop.width && height <= self.desktop.height;
                (fits && self.desktop_bpp > 0).then_some(self.desktop_bpp)
            }
            WindowMode::Fullscreen => self
                .fullscreen_modes
                .iter()
                .find(|(res, _)| res.width == width && res.height == height)
                .map(|(_, depth)| *depth),
        }
    }

    fn set_mode(
        &mut self,
        width: u32,
        height: u32,
        bpp: u8,
        mode: WindowMode,
    ) -> Result<(), VideoError> {
        if self.mode_possible(width, height, bpp, mode).is_none() {
            return Err(VideoError::Unsupported {
                width,
                height,
                bpp,
                mode,
            });
        }
        tracing::debug!("Headless video mode {}x{}x{} {}", width, height, bpp, mode);
        self.active = Some(ActiveMode {
            resolution: Resolution::new(width, height),
            bpp,
            mode,
        });
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.active.map_or(false, |m| m.mode.is_fullscreen())
    }

    fn set_gamma(&mut self, gamma: f32) {
        self.gamma = gamma;
    }
}

/// Game display without a window
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    pub video: HeadlessVideo,
    pub turbo: bool,
    pub grid: bool,
    pub redraws: u32,
    pub messages: Vec<String>,
}

impl HeadlessDisplay {
    pub fn new(video: HeadlessVideo) -> Self {
        Self {
            video,
            ..Self::default()
        }
    }
}

impl GameDisplay for HeadlessDisplay {
    fn video(&mut self) -> &mut dyn VideoBackend {
        &mut self.video
    }

    fn redraw_everything(&mut self) {
        self.redraws += 1;
    }

    fn set_turbo(&mut self, on: bool) {
        self.turbo = on;
    }

    fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    fn show_message(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.messages.push(message.to_string());
    }
}
