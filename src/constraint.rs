//! Constraint resolution shared by every container.
//!
//! A container's desired length on one axis comes from five inputs: the
//! constraint offered by its parent, the length the host declared for it
//! (if any), the length it measured from its content, and its min/max.
//! Pure functions, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenpanel::constraint::resolve_constraints;
//! use zenpanel::geometry::UNSET;
//!
//! // Nothing declared: measured length, capped by the constraint.
//! assert_eq!(resolve_constraints(50.0, UNSET, 80.0, 0.0, f64::INFINITY), 50.0);
//! // Declared length wins over measured.
//! assert_eq!(resolve_constraints(f64::INFINITY, 30.0, 80.0, 0.0, f64::INFINITY), 30.0);
//! // Minimum wins over the constraint.
//! assert_eq!(resolve_constraints(10.0, UNSET, 80.0, 40.0, f64::INFINITY), 40.0);
//! ```

use crate::geometry::{Rect, Size, is_unset};

/// Resolve one axis of a desired size.
///
/// `explicit` takes precedence over `measured` unless it is unset (NaN). The
/// preference is capped by `max`, then by `constraint`, and finally raised to
/// `min`: a container never reports less than its minimum, even when the
/// space offered is smaller. An infinite or NaN constraint does not cap.
pub fn resolve_constraints(
    constraint: f64,
    explicit: f64,
    measured: f64,
    min: f64,
    max: f64,
) -> f64 {
    let mut length = if is_unset(explicit) { measured } else { explicit };

    if max < length {
        length = max;
    }
    // NaN compares false, so an unset constraint never caps.
    if constraint < length {
        length = constraint;
    }
    if min > length {
        length = min;
    }
    length
}

/// Resolve both axes against a `(width, height)` constraint pair.
pub fn resolve_size(
    constraint: Size,
    explicit: Size,
    measured: Size,
    min: Size,
    max: Size,
) -> Size {
    Size::new(
        resolve_constraints(
            constraint.width,
            explicit.width,
            measured.width,
            min.width,
            max.width,
        ),
        resolve_constraints(
            constraint.height,
            explicit.height,
            measured.height,
            min.height,
            max.height,
        ),
    )
}

/// How an element wants to sit inside the slot its parent arranges it in.
///
/// Only [`Fill`](Self::Fill) affects the containers in this crate; the
/// others are positioned by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the left/top of the slot.
    Start,
    /// Center within the slot.
    Center,
    /// Align to the right/bottom of the slot.
    End,
    /// Stretch to cover the slot.
    #[default]
    Fill,
}

/// Grow `size` to cover `bounds` on each axis whose alignment is `Fill`.
///
/// Axes with any other alignment keep the computed size.
pub fn adjust_for_fill(
    size: Size,
    bounds: Rect,
    horizontal: Alignment,
    vertical: Alignment,
) -> Size {
    let mut adjusted = size;
    if horizontal == Alignment::Fill {
        adjusted.width = bounds.width.max(size.width);
    }
    if vertical == Alignment::Fill {
        adjusted.height = bounds.height.max(size.height);
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::UNSET;

    const INF: f64 = f64::INFINITY;

    // ── resolve_constraints ─────────────────────────────────────────────

    #[test]
    fn measured_used_when_explicit_unset() {
        assert_eq!(resolve_constraints(INF, UNSET, 42.0, 0.0, INF), 42.0);
    }

    #[test]
    fn explicit_beats_measured() {
        assert_eq!(resolve_constraints(INF, 10.0, 42.0, 0.0, INF), 10.0);
    }

    #[test]
    fn explicit_zero_is_not_unset() {
        assert_eq!(resolve_constraints(INF, 0.0, 42.0, 0.0, INF), 0.0);
    }

    #[test]
    fn max_caps_preference() {
        assert_eq!(resolve_constraints(INF, 100.0, 0.0, 0.0, 60.0), 60.0);
    }

    #[test]
    fn constraint_caps_preference() {
        assert_eq!(resolve_constraints(25.0, 100.0, 0.0, 0.0, INF), 25.0);
    }

    #[test]
    fn min_beats_constraint() {
        assert_eq!(resolve_constraints(5.0, UNSET, 2.0, 12.0, INF), 12.0);
    }

    #[test]
    fn min_beats_max() {
        // Inconsistent min/max: min wins, matching the host toolkit.
        assert_eq!(resolve_constraints(INF, 50.0, 0.0, 30.0, 20.0), 30.0);
    }

    #[test]
    fn nan_constraint_does_not_cap() {
        assert_eq!(resolve_constraints(f64::NAN, UNSET, 42.0, 0.0, INF), 42.0);
    }

    #[test]
    fn explicit_within_bounds_and_constraint_is_exact() {
        assert_eq!(resolve_constraints(100.0, 30.0, 7.0, 10.0, 50.0), 30.0);
    }

    #[test]
    fn resolve_size_axes_are_independent() {
        let s = resolve_size(
            Size::new(10.0, INF),
            Size::new(UNSET, 5.0),
            Size::new(30.0, 30.0),
            Size::ZERO,
            Size::INFINITY,
        );
        assert_eq!(s, Size::new(10.0, 5.0));
    }

    // ── adjust_for_fill ─────────────────────────────────────────────────

    #[test]
    fn fill_grows_to_bounds() {
        let s = adjust_for_fill(
            Size::new(12.0, 12.0),
            Rect::new(0.0, 0.0, 20.0, 30.0),
            Alignment::Fill,
            Alignment::Fill,
        );
        assert_eq!(s, Size::new(20.0, 30.0));
    }

    #[test]
    fn non_fill_keeps_size() {
        let s = adjust_for_fill(
            Size::new(12.0, 12.0),
            Rect::new(0.0, 0.0, 20.0, 30.0),
            Alignment::Start,
            Alignment::Center,
        );
        assert_eq!(s, Size::new(12.0, 12.0));
    }

    #[test]
    fn fill_never_shrinks() {
        let s = adjust_for_fill(
            Size::new(50.0, 12.0),
            Rect::new(0.0, 0.0, 20.0, 30.0),
            Alignment::Fill,
            Alignment::End,
        );
        assert_eq!(s, Size::new(50.0, 12.0));
    }
}
