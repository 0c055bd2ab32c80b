//! Stretch modes and scale-factor computation for scaling containers.
//!
//! Given the space available and a child's natural size, derive either the
//! size the container should report ([`calculate_size`]) or the scale factors
//! to apply to the child ([`calculate_scaling`]). Pure geometry, `no_std`.
//!
//! # Example
//!
//! ```
//! use zenpanel::{Size, Stretch, StretchDirection, calculate_size};
//!
//! // 100×50 into 50×50: width constrains, so everything halves.
//! let size = calculate_size(
//!     Stretch::Uniform,
//!     StretchDirection::Both,
//!     Size::new(50.0, 50.0),
//!     Size::new(100.0, 50.0),
//! );
//! assert_eq!(size, Size::new(50.0, 25.0));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::geometry::Size;

/// How a child's natural size is mapped onto the available space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stretch {
    /// Keep the natural size; scale stays 1.
    None,
    /// Scale each axis independently to exactly cover the space.
    /// Aspect ratio is not preserved.
    Fill,
    /// Scale uniformly until one axis meets the space.
    /// The other axis may fall short.
    #[default]
    Uniform,
    /// Scale uniformly until both axes cover the space.
    /// One axis may overflow.
    UniformToFill,
}

/// Which way scaling is allowed to go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StretchDirection {
    /// Only enlarge; scale factors and size dimensions never drop below 1.
    UpOnly,
    /// Only shrink; scale factors and size dimensions never exceed 1.
    DownOnly,
    /// No restriction.
    #[default]
    Both,
}

impl StretchDirection {
    /// Clamp a scale factor against the unscaled baseline of 1.
    #[inline]
    pub fn clamp_scale(self, scale: f64) -> f64 {
        match self {
            Self::UpOnly => scale.max(1.0),
            Self::DownOnly => scale.min(1.0),
            Self::Both => scale,
        }
    }

    /// Clamp each dimension of a computed size against the constant `1.0`.
    ///
    /// `UpOnly` floors each dimension at 1, `DownOnly` caps it at 1.
    pub fn clamp_size(self, size: Size) -> Size {
        match self {
            Self::UpOnly => Size::new(size.width.max(1.0), size.height.max(1.0)),
            Self::DownOnly => Size::new(size.width.min(1.0), size.height.min(1.0)),
            Self::Both => size,
        }
    }

    fn clamp(self, scale: Scale) -> Scale {
        Scale::new(self.clamp_scale(scale.x), self.clamp_scale(scale.y))
    }
}

/// Horizontal and vertical scale factors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Scale {
    /// No scaling.
    pub const IDENTITY: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same factor on both axes.
    pub const fn uniform(scale: f64) -> Self {
        Self::new(scale, scale)
    }

    pub fn is_uniform(&self) -> bool {
        self.x == self.y
    }
}

/// Compute the size a scaling container should request.
///
/// - A child with zero natural width or height yields `0 × 0`.
/// - [`Stretch::None`] returns the natural size.
/// - [`Stretch::Fill`] returns `available` unchanged, infinite axes included.
/// - [`Stretch::Uniform`] / [`Stretch::UniformToFill`] return the natural
///   size times the min / max axis ratio, then clamp each dimension of that
///   size with [`StretchDirection::clamp_size`].
///
/// The size clamp is against the constant `1.0`, not the natural size, so
/// `DownOnly` caps each dimension at one unit.
pub fn calculate_size(
    stretch: Stretch,
    direction: StretchDirection,
    available: Size,
    natural: Size,
) -> Size {
    if natural.is_degenerate() {
        return Size::ZERO;
    }
    let ratios = axis_ratios(available, natural);

    match stretch {
        Stretch::None => natural,
        Stretch::Fill => available,
        Stretch::Uniform => {
            direction.clamp_size(natural.scale(Scale::uniform(ratios.x.min(ratios.y))))
        }
        Stretch::UniformToFill => {
            direction.clamp_size(natural.scale(Scale::uniform(ratios.x.max(ratios.y))))
        }
    }
}

/// Compute the scale factors to apply to a child of natural size `natural`
/// arranged into `available`.
///
/// - A child with zero natural width or height yields [`Scale::IDENTITY`].
/// - [`Stretch::None`] yields [`Scale::IDENTITY`].
/// - [`Stretch::Fill`] yields the per-axis ratios, each clamped by `direction`.
/// - [`Stretch::Uniform`] / [`Stretch::UniformToFill`] yield the min / max
///   ratio on both axes, clamped by `direction`.
pub fn calculate_scaling(
    stretch: Stretch,
    direction: StretchDirection,
    available: Size,
    natural: Size,
) -> Scale {
    if natural.is_degenerate() {
        return Scale::IDENTITY;
    }
    let ratios = axis_ratios(available, natural);

    match stretch {
        Stretch::None => Scale::IDENTITY,
        Stretch::Fill => direction.clamp(ratios),
        Stretch::Uniform => direction.clamp(Scale::uniform(ratios.x.min(ratios.y))),
        Stretch::UniformToFill => direction.clamp(Scale::uniform(ratios.x.max(ratios.y))),
    }
}

/// `available / natural` per axis. `natural` must be non-degenerate; an
/// infinite available axis gives an infinite ratio.
fn axis_ratios(available: Size, natural: Size) -> Scale {
    Scale::new(
        available.width / natural.width,
        available.height / natural.height,
    )
}

// ── names ───────────────────────────────────────────────────────────────

impl Stretch {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Fill => "Fill",
            Self::Uniform => "Uniform",
            Self::UniformToFill => "UniformToFill",
        }
    }
}

impl StretchDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpOnly => "UpOnly",
            Self::DownOnly => "DownOnly",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Stretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StretchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses variant names as written in UI descriptions, ignoring ASCII case.
impl FromStr for Stretch {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::None, Self::Fill, Self::Uniform, Self::UniformToFill]
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(LayoutError::UnrecognizedValue)
    }
}

impl FromStr for StretchDirection {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::UpOnly, Self::DownOnly, Self::Both]
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(LayoutError::UnrecognizedValue)
    }
}
