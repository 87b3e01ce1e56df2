//! Video mode API

use thiserror::Error;

/// Whether a mode covers the whole screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowMode {
    Windowed,
    Fullscreen,
}

impl WindowMode {
    pub fn from_fullscreen(on: bool) -> Self {
        if on {
            Self::Fullscreen
        } else {
            Self::Windowed
        }
    }

    pub fn is_fullscreen(self) -> bool {
        self == Self::Fullscreen
    }
}

impl std::fmt::Display for WindowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windowed => f.write_str("windowed"),
            Self::Fullscreen => f.write_str("fullscreen"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoError {
    #[error("no {mode} video mode {width}x{height} at {bpp} bpp")]
    Unsupported {
        width: u32,
        height: u32,
        bpp: u8,
        mode: WindowMode,
    },

    #[error("no monitor available for {0} mode")]
    NoMonitor(WindowMode),
}

/// Mode setting on the running display
pub trait VideoBackend {
    /// Colour depth the display would use for this mode, or `None` when the
    /// mode cannot be set.
    fn mode_possible(&self, width: u32, height: u32, bpp: u8, mode: WindowMode) -> Option<u8>;

    fn set_mode(&mut self, width: u32, height: u32, bpp: u8, mode: WindowMode)
        -> Result<(), VideoError>;

    fn is_fullscreen(&self) -> bool;

    /// Hardware gamma; `1.0` is neutral.
    fn set_gamma(&mut self, gamma: f32);
}
