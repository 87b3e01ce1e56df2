//! Push and check buttons

use crate::font::FontMetrics;
use crate::widgets::{impl_widget_state, Widget, WidgetState};

/// Side of the check box drawn left of a check button's label
const CHECKBOX_SIZE: u32 = 16;
const LABEL_GAP: u32 = 6;
const PUSH_PADDING: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Push,
    Check,
}

#[derive(Debug, Clone)]
pub struct Button {
    state: WidgetState,
    kind: ButtonKind,
    label: String,
    checked: bool,
    pressed: bool,
    /// Zero means "fit the label"
    fixed_width: u32,
    font: FontMetrics,
}

impl Button {
    pub fn new(kind: ButtonKind, label: impl Into<String>, font: FontMetrics) -> Self {
        Self {
            state: WidgetState::default(),
            kind,
            label: label.into(),
            checked: false,
            pressed: false,
            fixed_width: 0,
            font,
        }
    }

    pub fn push(label: impl Into<String>, font: FontMetrics) -> Self {
        Self::new(ButtonKind::Push, label, font)
    }

    pub fn check(label: impl Into<String>, font: FontMetrics) -> Self {
        Self::new(ButtonKind::Check, label, font)
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        let width = self.width();
        self.state_mut().location.w = width;
    }

    /// Force a width; zero goes back to fitting the label.
    pub fn set_width(&mut self, width: u32) {
        self.fixed_width = width;
        let width = self.width();
        self.state_mut().location.w = width;
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_check(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Player click. Ignored while hidden or disabled; toggles check buttons.
    pub fn click(&mut self) -> bool {
        if !self.interactive() {
            return false;
        }
        if self.kind == ButtonKind::Check {
            self.checked = !self.checked;
        }
        self.pressed = true;
        true
    }

    /// Whether the button was clicked since the last call
    pub fn pressed(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}

impl Widget for Button {
    impl_widget_state!(Button);

    fn natural_size(&self) -> (u32, u32) {
        if self.fixed_width > 0 {
            return (self.fixed_width, self.font.row_height);
        }
        let text = self.font.text_width(&self.label);
        let w = match self.kind {
            ButtonKind::Check => CHECKBOX_SIZE + LABEL_GAP + text,
            ButtonKind::Push => text + 2 * PUSH_PADDING,
        };
        (w, self.font.row_height)
    }
}
