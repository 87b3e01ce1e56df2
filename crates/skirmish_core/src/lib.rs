//! Skirmish Core
//!
//! Shared building blocks for the game crates:
//! - Screen geometry
//! - Localization seam

pub mod geometry;
pub mod l10n;

pub use geometry::Rect;
pub use l10n::{sgettext, Identity, Translate};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
