//! Geometry value types: rectangles, sizes and edge insets.
//!
//! Plain `f64` arithmetic with no hidden normalisation. A rectangle with a
//! negative width or height is kept as-is so callers can tell that an item
//! did not fit; see [`Rect::is_empty`].

use num_traits::Float;

/// Fitting-size value meaning "no limit along this axis".
pub const UNBOUNDED: f64 = f64::MAX;

/// Largest width or height a layout pass works with.
///
/// Pass bounds are clamped to this so that "infinite" fitting sizes don't
/// overflow when calculators add, subtract or halve them.
pub const MAX_LAYOUT_DIMENSION: f64 = 1.0e8;

/// Width × height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unbounded on both axes.
    pub const UNBOUNDED: Self = Self::new(UNBOUNDED, UNBOUNDED);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Same height, unbounded width.
    pub fn with_unbounded_width(self) -> Self {
        Self::new(UNBOUNDED, self.height)
    }

    /// Same width, unbounded height.
    pub fn with_unbounded_height(self) -> Self {
        Self::new(self.width, UNBOUNDED)
    }

    /// Clamp both axes to [`MAX_LAYOUT_DIMENSION`].
    pub fn clamped(self) -> Self {
        Self::new(
            self.width.min(MAX_LAYOUT_DIMENSION),
            self.height.min(MAX_LAYOUT_DIMENSION),
        )
    }

    /// Shrink by the insets on each axis. May go negative.
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }

    /// Grow by the insets on each axis.
    pub fn outset_by(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width + insets.horizontal(),
            self.height + insets.vertical(),
        )
    }
}

/// Offsets from the four edges of a rectangle.
///
/// Field order follows the usual UI convention: top, left, bottom, right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// All four sides zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets from each side.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same value on all four sides.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Only the top edge.
    pub const fn top(value: f64) -> Self {
        Self::new(value, 0.0, 0.0, 0.0)
    }

    /// Only the left edge.
    pub const fn left(value: f64) -> Self {
        Self::new(0.0, value, 0.0, 0.0)
    }

    /// Only the bottom edge.
    pub const fn bottom(value: f64) -> Self {
        Self::new(0.0, 0.0, value, 0.0)
    }

    /// Only the right edge.
    pub const fn right(value: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, value)
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Zero rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Rect spanning the given edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Replace the size, keeping the origin.
    pub fn with_size(self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// True when the rect covers no area (width or height `<= 0`).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Move each edge inward by the matching inset.
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }

    /// Move each edge outward by the matching inset.
    pub fn outset_by(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.x - insets.left,
            self.y - insets.top,
            self.width + insets.horizontal(),
            self.height + insets.vertical(),
        )
    }

    /// Smallest rect spanning both.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_edges(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Smallest rect with whole-number edges that contains this one.
    pub fn integral(&self) -> Self {
        Self::from_edges(
            Float::floor(self.min_x()),
            Float::floor(self.min_y()),
            Float::ceil(self.max_x()),
            Float::ceil(self.max_y()),
        )
    }

    /// Scale origin and size by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}
