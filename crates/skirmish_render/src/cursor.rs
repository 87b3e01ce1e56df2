//! Mouse cursor control

pub trait CursorControl {
    /// Switch between colour and monochrome cursor images
    fn use_colour(&mut self, on: bool);
}

/// Cursor control for displays without a pointer
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCursor {
    colour: bool,
}

impl NullCursor {
    pub fn colour(&self) -> bool {
        self.colour
    }
}

impl CursorControl for NullCursor {
    fn use_colour(&mut self, on: bool) {
        tracing::debug!("Colour cursors {}", if on { "on" } else { "off" });
        self.colour = on;
    }
}
