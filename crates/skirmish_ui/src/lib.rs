//! Skirmish UI
//!
//! The in-game preferences dialog and the controller that applies
//! preference changes to the running game.
//!
//! # Usage
//!
//! ```ignore
//! use skirmish_ui::{show_preferences_dialog, DisplayManager, Preferences, ScriptedHost};
//!
//! let mut prefs = Preferences::new(store);
//! let mut manager = DisplayManager::new(&mut prefs, Box::new(display));
//! let mut host = ScriptedHost::new(steps);
//! show_preferences_dialog(&mut host, &mut manager, &game_cfg)?;
//! ```

pub mod dialog;
pub mod font;
pub mod host;
pub mod preferences;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use dialog::{PreferencesDialog, Tab, WidgetId, WidgetInput};
pub use font::FontMetrics;
pub use host::{
    show_preferences_dialog, DialogButtons, DialogHost, DialogSpec, HostError, HostStep,
    PreviewPane, ScriptedHost, Section,
};
pub use preferences::{DisplayManager, ModeChange, Preferences, VIDEO_MODE_MESSAGE};
