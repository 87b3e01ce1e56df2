//! Row menu with a single selection

use crate::font::FontMetrics;
use crate::widgets::{impl_widget_state, Widget, WidgetState, COLUMN_SEPARATOR};

const DEFAULT_WIDTH: u32 = 300;

/// Scrollable list of rows; each row is split into columns on
/// [`COLUMN_SEPARATOR`].
#[derive(Debug, Clone)]
pub struct Menu {
    state: WidgetState,
    rows: Vec<Vec<String>>,
    selected: usize,
    max_height: Option<u32>,
    font: FontMetrics,
}

impl Menu {
    pub fn new(font: FontMetrics) -> Self {
        Self {
            state: WidgetState::default(),
            rows: Vec::new(),
            selected: 0,
            max_height: None,
            font,
        }
    }

    /// Replace the rows. With `keep_selection` the selected index survives
    /// as long as it is still in range; otherwise selection goes to the top.
    pub fn set_items(&mut self, items: Vec<String>, keep_selection: bool) {
        self.rows = items
            .iter()
            .map(|item| {
                item.split(COLUMN_SEPARATOR)
                    .map(|col| col.trim().to_string())
                    .collect()
            })
            .collect();
        if !keep_selection || self.selected >= self.rows.len() {
            self.selected = 0;
        }
        let height = self.natural_size().1;
        self.state_mut().location.h = height;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Selected row, `None` for an empty menu
    pub fn selection(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.selected)
    }

    /// Player selection; ignored out of range or while not interactive.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.interactive() || index >= self.rows.len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn set_max_height(&mut self, max_height: u32) {
        self.max_height = Some(max_height);
        let height = self.natural_size().1;
        self.state_mut().location.h = height;
    }

    pub fn height(&self) -> u32 {
        self.natural_size().1
    }
}

impl Widget for Menu {
    impl_widget_state!(Menu);

    fn natural_size(&self) -> (u32, u32) {
        let full = self.rows.len() as u32 * self.font.row_height;
        let h = match self.max_height {
            Some(max) => full.min(max),
            None => full,
        };
        (DEFAULT_WIDTH, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rows_split_on_separator() {
        let mut menu = Menu::new(FontMetrics::default());
        menu.set_items(items(&["Idle Animations=yes", "Lobby Joins=no"]), true);
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.row(1).unwrap(), ["Lobby Joins", "no"]);
        assert_eq!(menu.selection(), Some(0));
    }

    #[test]
    fn selection_survives_rebuild_only_in_range() {
        let mut menu = Menu::new(FontMetrics::default());
        menu.set_items(items(&["a=1", "b=2", "c=3"]), true);
        assert!(menu.select(2));
        menu.set_items(items(&["a=1", "b=2", "c=4"]), true);
        assert_eq!(menu.selection(), Some(2));
        menu.set_items(items(&["a=1"]), true);
        assert_eq!(menu.selection(), Some(0));
        menu.set_items(items(&["a=1", "b=2"]), true);
        menu.select(1);
        menu.set_items(items(&["a=1", "b=2"]), false);
        assert_eq!(menu.selection(), Some(0));
    }

    #[test]
    fn empty_menu_has_no_selection() {
        let mut menu = Menu::new(FontMetrics::default());
        assert_eq!(menu.selection(), None);
        assert!(!menu.select(0));
    }

    #[test]
    fn height_is_capped() {
        let mut menu = Menu::new(FontMetrics::default());
        menu.set_items(items(&["a", "b", "c", "d"]), true);
        assert_eq!(menu.height(), 80);
        menu.set_max_height(50);
        assert_eq!(menu.height(), 50);
    }
}
