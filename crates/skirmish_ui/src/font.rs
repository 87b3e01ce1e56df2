//! Text measurement
//!
//! Layout only needs widths and row heights, so fonts are reduced to a
//! fixed advance per character and a scale for relative sizes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Horizontal advance of one character, in pixels
    pub char_width: u32,
    /// Height of one line of text, in pixels
    pub row_height: u32,
    /// Scale applied to [`FontMetrics::relative_size`], in percent
    pub scale_percent: u32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            row_height: 20,
            scale_percent: 100,
        }
    }
}

impl FontMetrics {
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width
    }

    /// Scale a size designed for the default font
    pub fn relative_size(&self, size: i32) -> i32 {
        size * self.scale_percent as i32 / 100
    }
}
