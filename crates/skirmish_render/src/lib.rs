//! Skirmish Render System
//!
//! Video mode negotiation, the game display seam and cursor control.
//! Two display implementations ship here: a winit-backed window and a
//! headless display for tests and batch runs.

pub mod cursor;
pub mod display;
pub mod headless;
pub mod video;
pub mod window;

pub use winit;

pub use cursor::{CursorControl, NullCursor};
pub use display::GameDisplay;
pub use headless::{HeadlessDisplay, HeadlessVideo};
pub use video::{VideoBackend, VideoError, WindowMode};
pub use window::{WindowConfig, WindowDisplay};

/// Bits per pixel the game asks for when negotiating a mode
pub const PREFERRED_BPP: u8 = 16;
