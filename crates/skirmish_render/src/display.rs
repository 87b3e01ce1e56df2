//! The running game display, as seen by preference code

use skirmish_services::PreferenceStore;

use crate::video::VideoBackend;

pub trait GameDisplay {
    fn video(&mut self) -> &mut dyn VideoBackend;

    /// Invalidate and repaint everything, e.g. after a mode change
    fn redraw_everything(&mut self);

    fn set_turbo(&mut self, on: bool);

    fn set_grid(&mut self, on: bool);

    /// Modal message box with a single close button
    fn show_message(&mut self, message: &str);

    /// Re-read hotkey bindings from the preference store
    fn load_hotkeys(&mut self, _store: &PreferenceStore) {}
}
