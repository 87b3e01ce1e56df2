//! Widget state
//!
//! These widgets hold state only: where they are, whether they are visible
//! or enabled, and what the player did to them since the last event tick.
//! Drawing them is the host toolkit's job.

mod button;
mod label;
mod menu;
mod slider;
mod textbox;

pub use button::{Button, ButtonKind};
pub use label::Label;
pub use menu::Menu;
pub use slider::Slider;
pub use textbox::TextBox;

use skirmish_core::Rect;

/// Separates the columns of a menu row
pub const COLUMN_SEPARATOR: char = '=';
/// Marks a menu column as an image path
pub const IMAGE_PREFIX: char = '&';

/// State shared by every widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    location: Rect,
    hidden: bool,
    enabled: bool,
    help: String,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            location: Rect::default(),
            hidden: false,
            enabled: true,
            help: String::new(),
        }
    }
}

pub trait Widget {
    fn state(&self) -> &WidgetState;

    fn state_mut(&mut self) -> &mut WidgetState;

    /// Size the widget takes when nothing else constrains it
    fn natural_size(&self) -> (u32, u32);

    fn location(&self) -> Rect {
        self.state().location
    }

    /// Place the widget in `rect`; a zero width or height takes the natural one.
    fn set_location(&mut self, rect: Rect) {
        let (w, h) = self.natural_size();
        self.state_mut().location = Rect {
            x: rect.x,
            y: rect.y,
            w: if rect.w == 0 { w } else { rect.w },
            h: if rect.h == 0 { h } else { rect.h },
        };
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.set_location(Rect::at(x, y));
    }

    fn width(&self) -> u32 {
        self.natural_size().0
    }

    fn hidden(&self) -> bool {
        self.state().hidden
    }

    fn hide(&mut self, hidden: bool) {
        self.state_mut().hidden = hidden;
    }

    fn enabled(&self) -> bool {
        self.state().enabled
    }

    fn enable(&mut self, enabled: bool) {
        self.state_mut().enabled = enabled;
    }

    /// Visible and enabled, i.e. the player can act on it
    fn interactive(&self) -> bool {
        !self.hidden() && self.enabled()
    }

    fn help_string(&self) -> &str {
        &self.state().help
    }

    fn set_help_string(&mut self, help: String) {
        self.state_mut().help = help;
    }
}

macro_rules! impl_widget_state {
    ($ty:ty) => {
        fn state(&self) -> &$crate::widgets::WidgetState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut $crate::widgets::WidgetState {
            &mut self.state
        }
    };
}
pub(crate) use impl_widget_state;
