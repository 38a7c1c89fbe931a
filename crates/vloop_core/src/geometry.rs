//! Integer pixel geometry and measure specs
//!
//! Layout in vloop is a two-pass protocol: a parent measures each child with
//! a [`MeasureSpec`] per axis, then places it with a [`Rect`].

/// Measured size in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Placed rectangle in parent coordinates. `right`/`bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle with its top-left corner at `(left, top)` and the given size
    pub fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self::new(left, top, left + size.width, top + size.height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Whether any part of this rect overlaps `[0, height)` vertically
    pub fn intersects_band(&self, height: i32) -> bool {
        self.bottom > 0 && self.top < height
    }
}

/// Constraint for one axis during measurement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The child may be any size
    #[default]
    Unspecified,
    /// The child may be at most this size
    AtMost(i32),
    /// The child must be exactly this size
    Exactly(i32),
}

impl MeasureSpec {
    /// Reconcile a child's desired size with this spec
    pub fn resolve(self, desired: i32) -> i32 {
        match self {
            MeasureSpec::Unspecified => desired.max(0),
            MeasureSpec::AtMost(max) => desired.clamp(0, max.max(0)),
            MeasureSpec::Exactly(size) => size.max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_spec_resolve() {
        assert_eq!(MeasureSpec::Unspecified.resolve(42), 42);
        assert_eq!(MeasureSpec::AtMost(30).resolve(42), 30);
        assert_eq!(MeasureSpec::AtMost(30).resolve(12), 12);
        assert_eq!(MeasureSpec::Exactly(30).resolve(12), 30);
    }

    #[test]
    fn test_measure_spec_never_negative() {
        assert_eq!(MeasureSpec::AtMost(-5).resolve(10), 0);
        assert_eq!(MeasureSpec::Unspecified.resolve(-3), 0);
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(4, -10, Size::new(100, 20));
        assert_eq!(rect, Rect::new(4, -10, 104, 10));
        assert_eq!(rect.size(), Size::new(100, 20));
    }

    #[test]
    fn test_intersects_band() {
        assert!(Rect::new(0, -10, 10, 1).intersects_band(36));
        assert!(!Rect::new(0, 36, 10, 56).intersects_band(36));
        assert!(!Rect::new(0, -20, 10, 0).intersects_band(36));
    }
}
