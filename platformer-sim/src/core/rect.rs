//! Axis-Aligned Rectangles
//!
//! Float rectangles with a top-left origin and y growing downward, the
//! convention of the screen the simulation is drawn on.

use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// Which point of a rectangle a position refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Middle of the bottom edge (feet of a standing sprite)
    #[default]
    MidBottom,
    /// Top-right corner
    TopRight,
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

impl Rect {
    /// Create from top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle of `size` whose `anchor` point sits at `point`.
    pub fn anchored(anchor: Anchor, point: Vec2, size: Vec2) -> Self {
        let mut rect = Self::new(0.0, 0.0, size.x, size.y);
        rect.set_anchor(anchor, point);
        rect
    }

    /// Move the rectangle so its `anchor` point sits at `point`.
    pub fn set_anchor(&mut self, anchor: Anchor, point: Vec2) {
        match anchor {
            Anchor::MidBottom => {
                self.x = point.x - self.w / 2.0;
                self.y = point.y - self.h;
            }
            Anchor::TopRight => {
                self.x = point.x - self.w;
                self.y = point.y;
            }
        }
    }

    /// Right edge x.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Top edge y.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge y.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Middle of the bottom edge.
    #[inline]
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h)
    }

    /// Centre point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Same rectangle shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True if `inner` lies entirely within this rectangle (edges included).
    #[inline]
    pub fn contains(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// Move this rectangle inside `bounds`.
    ///
    /// On each axis the rectangle slides the minimum distance needed to fit.
    /// If it is larger than `bounds` on an axis it is centred on that axis
    /// instead. The size never changes.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = clamp_axis(self.x, self.w, bounds.x, bounds.w);
        self.y = clamp_axis(self.y, self.h, bounds.y, bounds.h);
    }
}

fn clamp_axis(start: f64, len: f64, bound_start: f64, bound_len: f64) -> f64 {
    if len >= bound_len {
        bound_start + bound_len / 2.0 - len / 2.0
    } else if start < bound_start {
        bound_start
    } else if start + len > bound_start + bound_len {
        bound_start + bound_len - len
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_bottom_anchor() {
        let rect = Rect::anchored(Anchor::MidBottom, Vec2::new(300.0, 200.0), Vec2::new(20.0, 40.0));
        assert_eq!(rect, Rect::new(290.0, 160.0, 20.0, 40.0));
        assert_eq!(rect.mid_bottom(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_top_right_anchor() {
        let rect = Rect::anchored(Anchor::TopRight, Vec2::new(600.0, 390.0), Vec2::new(600.0, 10.0));
        assert_eq!(rect, Rect::new(0.0, 390.0, 600.0, 10.0));
        assert_eq!(rect.bottom(), 400.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let crossing = Rect::new(9.0, 9.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn test_contains_includes_edges() {
        let screen = Rect::new(0.0, 0.0, 600.0, 400.0);
        assert!(screen.contains(&Rect::new(580.0, 360.0, 20.0, 40.0)));
        assert!(!screen.contains(&Rect::new(585.0, 360.0, 20.0, 40.0)));
        assert!(!screen.contains(&Rect::new(-0.5, 0.0, 20.0, 40.0)));
    }

    #[test]
    fn test_clamp_within_slides_minimum() {
        let screen = Rect::new(0.0, 0.0, 600.0, 400.0);

        let mut right = Rect::new(585.0, 100.0, 20.0, 40.0);
        right.clamp_within(&screen);
        assert_eq!(right, Rect::new(580.0, 100.0, 20.0, 40.0));

        let mut top_left = Rect::new(-10.0, -40.0, 20.0, 40.0);
        top_left.clamp_within(&screen);
        assert_eq!(top_left, Rect::new(0.0, 0.0, 20.0, 40.0));

        let mut inside = Rect::new(100.0, 100.0, 20.0, 40.0);
        inside.clamp_within(&screen);
        assert_eq!(inside, Rect::new(100.0, 100.0, 20.0, 40.0));
    }

    #[test]
    fn test_clamp_within_centres_oversized() {
        let screen = Rect::new(0.0, 0.0, 600.0, 400.0);
        let mut wide = Rect::new(-500.0, 10.0, 800.0, 10.0);
        wide.clamp_within(&screen);
        assert_eq!(wide.x, -100.0);
        assert_eq!(wide.y, 10.0);
    }
}
