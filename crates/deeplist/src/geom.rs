//! Cell geometry: points, sizes, rectangles and single-row lines.

/// A cell location.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Point {
    /// The origin.
    pub fn zero() -> Self {
        (0, 0).into()
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

/// An `Expanse` is a rectangle that has a width and height but no location.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Return a `Rect` with the same dimensions, located at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::zero(),
            w: self.w,
            h: self.h,
        }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

/// A rectangle with a top-left corner and a size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.tl.x
            && p.x < self.tl.x.saturating_add(self.w)
            && p.y >= self.tl.y
            && p.y < self.tl.y.saturating_add(self.h)
    }

    /// The overlap of two rectangles, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x0 = self.tl.x.max(other.tl.x);
        let y0 = self.tl.y.max(other.tl.y);
        let x1 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y1 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x0 < x1 && y0 < y1 {
            Some(Self::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    /// Does this rectangle fully enclose another? Empty rectangles inside
    /// our bounds count as enclosed.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.tl.x + other.w <= self.tl.x + self.w
            && other.tl.y + other.h <= self.tl.y + self.h
    }
}

/// A horizontal line, one cell high - essentially a Rect with height 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Line {
    /// Leftmost cell.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
}

impl Line {
    /// Construct a line.
    pub fn new(x: u32, y: u32, w: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn contains() {
        let r = Rect::new(2, 2, 3, 1);
        assert!(r.contains_point((2, 2)));
        assert!(r.contains_point((4, 2)));
        assert!(!r.contains_point((5, 2)));
        assert!(!r.contains_point((2, 3)));
    }

    #[test]
    fn contains_rect() {
        let r = Rect::new(1, 1, 4, 3);
        assert!(r.contains_rect(&Rect::new(1, 1, 4, 3)));
        assert!(r.contains_rect(&Rect::new(2, 2, 0, 0)));
        assert!(!r.contains_rect(&Rect::new(2, 1, 4, 3)));
        assert!(!r.contains_rect(&Rect::new(0, 1, 1, 1)));
    }
}
