//! Static text

use crate::font::FontMetrics;
use crate::widgets::{impl_widget_state, Widget, WidgetState};

#[derive(Debug, Clone)]
pub struct Label {
    state: WidgetState,
    text: String,
    font: FontMetrics,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontMetrics) -> Self {
        Self {
            state: WidgetState::default(),
            text: text.into(),
            font,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let width = self.width();
        self.state_mut().location.w = width;
    }
}

impl Widget for Label {
    impl_widget_state!(Label);

    fn natural_size(&self) -> (u32, u32) {
        (self.font.text_width(&self.text), self.font.row_height)
    }
}
