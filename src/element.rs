//! The two-pass layout protocol every container and child obeys.
//!
//! A parent calls [`Element::measure`] with a width/height constraint (either
//! may be infinite); the element caches and returns its desired size. Later
//! the parent calls [`Element::arrange`] with the final slot, and the element
//! positions its own children inside it in local coordinates.
//!
//! ```text
//!   parent ── measure(w, h) ──▶ element ── measure(..) ──▶ children
//!          ◀── desired size ──
//!   parent ── arrange(slot) ──▶ element ── arrange(rect) ─▶ children
//! ```

use crate::constraint::{Alignment, resolve_size};
use crate::geometry::{Rect, Size, Thickness, UNSET};

/// Whether an element takes part in layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Measured, arranged, and drawn.
    #[default]
    Visible,
    /// Measured and arranged but not drawn; still reserves space.
    Hidden,
    /// Skipped by both passes; contributes nothing to its parent.
    Collapsed,
}

/// Layout attributes the host declares on an element.
///
/// Lengths default to unset (explicit size), zero (minimum), and infinity
/// (maximum). Alignment defaults to [`Alignment::Fill`].
///
/// ```
/// use zenpanel::{Alignment, LayoutProps, Thickness};
///
/// let props = LayoutProps::new()
///     .width(120.0)
///     .min_height(16.0)
///     .padding(Thickness::uniform(4.0))
///     .horizontal(Alignment::Start);
/// assert_eq!(props.explicit_size().width, 120.0);
/// assert!(props.explicit_size().height.is_nan());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutProps {
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
    pub padding: Thickness,
    pub horizontal: Alignment,
    pub vertical: Alignment,
    pub visibility: Visibility,
}

impl Default for LayoutProps {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutProps {
    /// Nothing declared.
    pub const fn new() -> Self {
        Self {
            width: UNSET,
            height: UNSET,
            min_width: 0.0,
            min_height: 0.0,
            max_width: f64::INFINITY,
            max_height: f64::INFINITY,
            padding: Thickness::ZERO,
            horizontal: Alignment::Fill,
            vertical: Alignment::Fill,
            visibility: Visibility::Visible,
        }
    }

    /// Declare an explicit width. NaN means unset.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Declare an explicit height. NaN means unset.
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn padding(mut self, padding: Thickness) -> Self {
        self.padding = padding;
        self
    }

    pub fn horizontal(mut self, alignment: Alignment) -> Self {
        self.horizontal = alignment;
        self
    }

    pub fn vertical(mut self, alignment: Alignment) -> Self {
        self.vertical = alignment;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Declared `(width, height)`; either may be unset.
    pub fn explicit_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }
}

/// A participant in the measure/arrange protocol.
///
/// Containers own their children as `Box<dyn Element>`.
pub trait Element {
    /// Compute and cache the desired size under the given constraints.
    fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size;

    /// Size computed by the last [`measure`](Self::measure).
    fn desired_size(&self) -> Size;

    /// Place the element in `bounds` (parent-local coordinates).
    fn arrange(&mut self, bounds: Rect);

    /// Bounds given to the last [`arrange`](Self::arrange).
    fn frame(&self) -> Rect;

    /// Declared layout attributes.
    fn props(&self) -> &LayoutProps;

    fn visibility(&self) -> Visibility {
        self.props().visibility
    }

    /// Collapsed elements are skipped by both passes.
    fn is_collapsed(&self) -> bool {
        self.visibility() == Visibility::Collapsed
    }
}

/// The public layout surface of a container.
///
/// A host may drive a container directly through this trait instead of
/// [`Element`]. Both calls record their result in the container's
/// [`LayoutState`], so either entry point leaves the same dirty flags behind.
///
/// ```
/// use zenpanel::{Decorator, LayoutManager, LayoutProps, Rect, Size, Thickness};
///
/// fn run(container: &mut impl LayoutManager, width: f64, height: f64) -> Size {
///     container.measure(width, height);
///     container.arrange_children(Rect::new(0.0, 0.0, width, height))
/// }
///
/// let mut d = Decorator::new().with_props(LayoutProps::new().padding(Thickness::uniform(2.0)));
/// assert_eq!(run(&mut d, 10.0, 10.0), Size::new(10.0, 10.0));
/// assert!(!d.state().needs_measure() && !d.state().needs_arrange());
/// ```
pub trait LayoutManager {
    /// Measure pass: compute, record, and return the desired size.
    fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size;

    /// Arrange pass: position the children inside `bounds` (container-local)
    /// and return the size the container reserves.
    fn arrange_children(&mut self, bounds: Rect) -> Size;
}

/// Cached results of the last layout pass plus dirty flags.
///
/// Containers mark themselves dirty whenever an input to their layout
/// changes; the host scheduler polls [`needs_measure`](Self::needs_measure)
/// and [`needs_arrange`](Self::needs_arrange) to decide when to run a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutState {
    desired: Size,
    frame: Rect,
    measure_valid: bool,
    arrange_valid: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Fresh state: nothing measured or arranged yet.
    pub const fn new() -> Self {
        Self {
            desired: Size::ZERO,
            frame: Rect::new(0.0, 0.0, 0.0, 0.0),
            measure_valid: false,
            arrange_valid: false,
        }
    }

    pub fn desired_size(&self) -> Size {
        self.desired
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn needs_measure(&self) -> bool {
        !self.measure_valid
    }

    pub fn needs_arrange(&self) -> bool {
        !self.arrange_valid
    }

    /// A new measure also implies a new arrange.
    pub fn invalidate_measure(&mut self) {
        self.measure_valid = false;
        self.arrange_valid = false;
    }

    pub fn invalidate_arrange(&mut self) {
        self.arrange_valid = false;
    }

    /// Store `desired` as the result of a measure pass and return it.
    pub fn record_measure(&mut self, desired: Size) -> Size {
        self.desired = desired;
        self.measure_valid = true;
        desired
    }

    pub fn record_arrange(&mut self, frame: Rect) {
        self.frame = frame;
        self.arrange_valid = true;
    }
}

/// Handle identifying a child inside the container that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildId(u64);

impl ChildId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An element with a known intrinsic size and no children.
///
/// Stands in for host primitives (images, pre-shaped text) whose natural
/// size is computed elsewhere.
///
/// ```
/// use zenpanel::{Element, LayoutProps, Leaf, Size};
///
/// let mut leaf = Leaf::new(Size::new(40.0, 10.0)).with_props(LayoutProps::new().width(25.0));
/// assert_eq!(leaf.measure(f64::INFINITY, 5.0), Size::new(25.0, 5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    intrinsic: Size,
    props: LayoutProps,
    state: LayoutState,
}

impl Leaf {
    /// A leaf with the given natural size and default props.
    pub fn new(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            props: LayoutProps::new(),
            state: LayoutState::new(),
        }
    }

    pub fn with_props(mut self, props: LayoutProps) -> Self {
        self.props = props;
        self
    }

    pub fn intrinsic(&self) -> Size {
        self.intrinsic
    }

    pub fn set_intrinsic(&mut self, intrinsic: Size) {
        if self.intrinsic != intrinsic {
            self.intrinsic = intrinsic;
            self.state.invalidate_measure();
        }
    }

    /// Mutable access to the declared attributes; marks the leaf for re-measure.
    pub fn props_mut(&mut self) -> &mut LayoutProps {
        self.state.invalidate_measure();
        &mut self.props
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }
}

impl Element for Leaf {
    fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size {
        if self.is_collapsed() {
            return self.state.record_measure(Size::ZERO);
        }
        let desired = resolve_size(
            Size::new(width_constraint, height_constraint),
            self.props.explicit_size(),
            self.intrinsic,
            self.props.min_size(),
            self.props.max_size(),
        );
        self.state.record_measure(desired)
    }

    fn desired_size(&self) -> Size {
        self.state.desired_size()
    }

    fn arrange(&mut self, bounds: Rect) {
        self.state.record_arrange(bounds);
    }

    fn frame(&self) -> Rect {
        self.state.frame()
    }

    fn props(&self) -> &LayoutProps {
        &self.props
    }
}

/// Implement [`LayoutManager`] and [`Element`] for a container with
/// `props: LayoutProps` and `state: LayoutState` fields and inherent
/// `measure`/`arrange_children` that record into `state`.
///
/// Collapsed containers measure to zero and skip arranging their children.
/// Children are arranged in container-local coordinates.
#[cfg(feature = "alloc")]
macro_rules! impl_container_element {
    ($container:ty) => {
        impl $crate::element::LayoutManager for $container {
            fn measure(
                &mut self,
                width_constraint: f64,
                height_constraint: f64,
            ) -> $crate::geometry::Size {
                <$container>::measure(self, width_constraint, height_constraint)
            }

            fn arrange_children(
                &mut self,
                bounds: $crate::geometry::Rect,
            ) -> $crate::geometry::Size {
                <$container>::arrange_children(self, bounds)
            }
        }

        impl $crate::element::Element for $container {
            fn measure(
                &mut self,
                width_constraint: f64,
                height_constraint: f64,
            ) -> $crate::geometry::Size {
                if self.props.visibility == $crate::element::Visibility::Collapsed {
                    self.state.record_measure($crate::geometry::Size::ZERO)
                } else {
                    <$container>::measure(self, width_constraint, height_constraint)
                }
            }

            fn desired_size(&self) -> $crate::geometry::Size {
                self.state.desired_size()
            }

            fn arrange(&mut self, bounds: $crate::geometry::Rect) {
                if self.props.visibility != $crate::element::Visibility::Collapsed {
                    <$container>::arrange_children(
                        self,
                        $crate::geometry::Rect::from_size(bounds.size()),
                    );
                }
                self.state.record_arrange(bounds);
            }

            fn frame(&self) -> $crate::geometry::Rect {
                self.state.frame()
            }

            fn props(&self) -> &$crate::element::LayoutProps {
                &self.props
            }
        }
    };
}

#[cfg(feature = "alloc")]
pub(crate) use impl_container_element;

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    // ── LayoutProps ─────────────────────────────────────────────────────

    #[test]
    fn default_props() {
        let p = LayoutProps::default();
        assert!(p.width.is_nan() && p.height.is_nan());
        assert_eq!(p.min_size(), Size::ZERO);
        assert_eq!(p.max_size(), Size::INFINITY);
        assert_eq!(p.horizontal, Alignment::Fill);
        assert_eq!(p.vertical, Alignment::Fill);
        assert_eq!(p.visibility, Visibility::Visible);
        assert!(p.padding.is_zero());
    }

    // ── LayoutState ─────────────────────────────────────────────────────

    #[test]
    fn fresh_state_is_dirty() {
        let s = LayoutState::new();
        assert!(s.needs_measure());
        assert!(s.needs_arrange());
    }

    #[test]
    fn invalidate_measure_implies_arrange() {
        let mut s = LayoutState::new();
        s.record_measure(Size::new(1.0, 1.0));
        s.record_arrange(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(!s.needs_measure() && !s.needs_arrange());
        s.invalidate_measure();
        assert!(s.needs_measure() && s.needs_arrange());
    }

    #[test]
    fn invalidate_arrange_keeps_measure() {
        let mut s = LayoutState::new();
        s.record_measure(Size::new(1.0, 1.0));
        s.record_arrange(Rect::new(0.0, 0.0, 1.0, 1.0));
        s.invalidate_arrange();
        assert!(!s.needs_measure());
        assert!(s.needs_arrange());
    }

    // ── Leaf ────────────────────────────────────────────────────────────

    #[test]
    fn leaf_measures_intrinsic_when_unconstrained() {
        let mut leaf = Leaf::new(Size::new(20.0, 10.0));
        assert_eq!(leaf.measure(INF, INF), Size::new(20.0, 10.0));
        assert_eq!(leaf.desired_size(), Size::new(20.0, 10.0));
    }

    #[test]
    fn leaf_respects_constraint_and_min() {
        let mut leaf = Leaf::new(Size::new(20.0, 10.0))
            .with_props(LayoutProps::new().min_height(15.0));
        assert_eq!(leaf.measure(8.0, 4.0), Size::new(8.0, 15.0));
    }

    #[test]
    fn collapsed_leaf_measures_zero() {
        let mut leaf = Leaf::new(Size::new(20.0, 10.0))
            .with_props(LayoutProps::new().visibility(Visibility::Collapsed));
        assert!(leaf.is_collapsed());
        assert_eq!(leaf.measure(INF, INF), Size::ZERO);
    }

    #[test]
    fn leaf_arrange_records_frame() {
        let mut leaf = Leaf::new(Size::new(20.0, 10.0));
        leaf.measure(INF, INF);
        leaf.arrange(Rect::new(3.0, 4.0, 20.0, 10.0));
        assert_eq!(leaf.frame(), Rect::new(3.0, 4.0, 20.0, 10.0));
        assert!(!leaf.state().needs_arrange());
    }

    #[test]
    fn set_intrinsic_invalidates_only_on_change() {
        let mut leaf = Leaf::new(Size::new(20.0, 10.0));
        leaf.measure(INF, INF);
        leaf.set_intrinsic(Size::new(20.0, 10.0));
        assert!(!leaf.state().needs_measure());
        leaf.set_intrinsic(Size::new(21.0, 10.0));
        assert!(leaf.state().needs_measure());
    }

    #[test]
    fn child_id_round_trips_raw_value() {
        assert_eq!(ChildId::new(7).get(), 7);
    }
}
