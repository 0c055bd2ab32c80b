//! Floating-point layout geometry: sizes, points, rects, and padding.
//!
//! All lengths are `f64` in logical units. An infinite length means
//! "unbounded" and a NaN length means "unset" (see [`UNSET`]).

use num_traits::Float;

use crate::stretch::Scale;

/// Sentinel for a length the host has not declared.
pub const UNSET: f64 = f64::NAN;

/// Whether `length` is the [`UNSET`] sentinel.
#[inline]
pub fn is_unset(length: f64) -> bool {
    length.is_nan()
}

/// Width × height in logical units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// `0 × 0`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unbounded on both axes; the constraint used to ask for natural size.
    pub const INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow by the padding on each side.
    pub fn inflate(self, thickness: Thickness) -> Self {
        Self {
            width: self.width + thickness.horizontal_thickness(),
            height: self.height + thickness.vertical_thickness(),
        }
    }

    /// Shrink by the padding on each side, clamping each axis at zero.
    pub fn deflate(self, thickness: Thickness) -> Self {
        Self {
            width: (self.width - thickness.horizontal_thickness()).max(0.0),
            height: (self.height - thickness.vertical_thickness()).max(0.0),
        }
    }

    /// Multiply each axis by its scale factor.
    pub fn scale(self, scale: Scale) -> Self {
        Self {
            width: self.width * scale.x,
            height: self.height * scale.y,
        }
    }

    /// Whether either axis is zero (nothing to scale).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Compare within `epsilon` on both axes.
    pub fn approx_eq(&self, other: Size, epsilon: f64) -> bool {
        Float::abs(self.width - other.width) <= epsilon
            && Float::abs(self.height - other.height) <= epsilon
    }
}

/// A position in logical units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of the given size anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// A rect of the given size at `origin`.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the origin in by `(left, top)` and shrink the size by the padding.
    ///
    /// The size is clamped at zero; the origin is not.
    pub fn deflate(self, thickness: Thickness) -> Self {
        Self::from_origin_size(
            Point::new(self.x + thickness.left, self.y + thickness.top),
            self.size().deflate(thickness),
        )
    }
}

/// Padding on each of the four edges.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    /// No padding.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create padding with specific values (left, top, right, bottom).
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on left and right, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// `left + right`.
    #[inline]
    pub fn horizontal_thickness(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    pub fn vertical_thickness(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
