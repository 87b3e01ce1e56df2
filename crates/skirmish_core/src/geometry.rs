//! Screen-space geometry
//!
//! Pixel rectangles in the same coordinate system the display uses
//! (origin top-left, y grows downwards).

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at `(x, y)` with no extent yet
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y, w: 0, h: 0 }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_containment() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert!(r.contains(10, 20));
        assert!(r.contains(39, 59));
        assert!(!r.contains(40, 20));
        assert!(!Rect::at(5, 5).contains(5, 5));
    }
}
