//! Axis-aligned rectangles and overlap tests

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Grow the rectangle by `dx` on the left and right and `dy` on top and bottom
    pub fn expand(&self, dx: f32, dy: f32) -> Self {
        Self {
            pos: self.pos - Vec2::new(dx, dy),
            size: self.size + Vec2::new(dx, dy) * 2.0,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && other.right() > self.left()
            && other.top() < self.bottom()
            && other.bottom() > self.top()
    }
}
