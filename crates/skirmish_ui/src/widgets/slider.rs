//! Integer slider

use crate::font::FontMetrics;
use crate::widgets::{impl_widget_state, Widget, WidgetState};

const DEFAULT_WIDTH: u32 = 100;

#[derive(Debug, Clone)]
pub struct Slider {
    state: WidgetState,
    min: i32,
    max: i32,
    value: i32,
    changed: bool,
    font: FontMetrics,
}

impl Slider {
    pub fn new(min: i32, max: i32, font: FontMetrics) -> Self {
        Self {
            state: WidgetState::default(),
            min,
            max: max.max(min),
            value: min,
            changed: false,
            font,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_min(&mut self, min: i32) {
        self.min = min;
        self.max = self.max.max(min);
        self.set_value(self.value);
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max;
        self.min = self.min.min(max);
        self.set_value(self.value);
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Clamp into range; flags a change only when the value moves.
    pub fn set_value(&mut self, value: i32) {
        let value = value.clamp(self.min, self.max);
        if value != self.value {
            self.value = value;
            self.changed = true;
        }
    }

    /// Player drag; ignored while hidden or disabled.
    pub fn drag_to(&mut self, value: i32) -> bool {
        if !self.interactive() {
            return false;
        }
        self.set_value(value);
        true
    }

    /// Whether the value moved since the last call
    pub fn value_change(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Widget for Slider {
    impl_widget_state!(Slider);

    fn natural_size(&self) -> (u32, u32) {
        (DEFAULT_WIDTH, self.font.row_height)
    }
}
