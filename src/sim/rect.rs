//! Axis-aligned rectangle geometry
//!
//! All world geometry is in screen-style coordinates: x grows right,
//! y grows down, and `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
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

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Penetration depth on each axis (zero or negative when apart)
    pub fn penetration(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }

    /// True if the horizontal extents intersect `[min_x, max_x]`
    pub fn spans_x(&self, min_x: f32, max_x: f32) -> bool {
        self.right() > min_x && self.left() < max_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 60.0, 60.0);
        let right = Rect::new(60.0, 0.0, 60.0, 60.0);
        let below = Rect::new(0.0, 60.0, 60.0, 60.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Rect::new(59.5, 59.5, 10.0, 10.0)));
    }

    #[test]
    fn penetration_depth() {
        let a = Rect::new(0.0, 0.0, 47.0, 60.0);
        let b = Rect::new(40.0, 50.0, 60.0, 60.0);
        assert_eq!(a.penetration(&b), Vec2::new(7.0, 10.0));
        let apart = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(a.penetration(&apart).x < 0.0);
    }

    #[test]
    fn edges_and_spans() {
        let r = Rect::from_pos_size(Vec2::new(11.0, 18.0), Vec2::new(5.0, 8.0));
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (11.0, 16.0, 18.0, 26.0));
        assert!(r.spans_x(15.0, 100.0));
        assert!(!r.spans_x(16.0, 100.0));
    }
}
