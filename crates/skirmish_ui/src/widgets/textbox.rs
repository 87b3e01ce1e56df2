//! Text entry

use crate::font::FontMetrics;
use crate::widgets::{impl_widget_state, Widget, WidgetState};

/// Single-line text entry of fixed width
#[derive(Debug, Clone)]
pub struct TextBox {
    state: WidgetState,
    text: String,
    width: u32,
    font: FontMetrics,
}

impl TextBox {
    pub fn new(width: u32, font: FontMetrics) -> Self {
        Self {
            state: WidgetState::default(),
            text: String::new(),
            width,
            font,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Player edit; replaces the contents while the box is interactive.
    pub fn type_text(&mut self, text: &str) -> bool {
        if !self.interactive() {
            return false;
        }
        self.text = text.to_string();
        true
    }
}

impl Widget for TextBox {
    impl_widget_state!(TextBox);

    fn natural_size(&self) -> (u32, u32) {
        (self.width, self.font.row_height)
    }
}
