//! Single-child container that scales its child to the available space.
//!
//! The child is never measured against the available space. The viewbox
//! asks an internal [`ScaleContainer`] for the child's natural size (at
//! infinite constraints), derives a size or scale from [`Stretch`] and
//! [`StretchDirection`], and applies the scale as a render transform
//! anchored at the top-left corner. The child itself is always arranged at
//! its natural size.

use alloc::boxed::Box;

use crate::decorator::Decorator;
use crate::element::{Element, LayoutProps, LayoutState, impl_container_element};
use crate::geometry::{Rect, Size};
use crate::stretch::{Scale, Stretch, StretchDirection, calculate_scaling, calculate_size};

/// Scale factors applied to the scaled content, anchored at `(anchor_x, anchor_y)`
/// as fractions of its size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleTransform {
    /// Overall scale, mirrors the horizontal factor for hosts that read a
    /// single value.
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScaleTransform {
    /// Unscaled, anchored top-left.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        anchor_x: 0.0,
        anchor_y: 0.0,
    };

    /// Per-axis factors as a [`Scale`].
    pub fn factors(&self) -> Scale {
        Scale::new(self.scale_x, self.scale_y)
    }

    fn set(&mut self, scale: Scale) {
        self.scale = scale.x;
        self.scale_x = scale.x;
        self.scale_y = scale.y;
    }
}

/// The pass-through container a [`Viewbox`] scales.
///
/// A zero-padding [`Decorator`] plus a top-left anchored [`ScaleTransform`].
/// Owned exclusively by its viewbox.
#[derive(Debug, Default)]
pub struct ScaleContainer {
    inner: Decorator,
    transform: ScaleTransform,
}

impl ScaleContainer {
    fn new() -> Self {
        Self {
            inner: Decorator::new(),
            transform: ScaleTransform::IDENTITY,
        }
    }

    pub fn transform(&self) -> ScaleTransform {
        self.transform
    }

    pub fn child(&self) -> Option<&dyn Element> {
        self.inner.child()
    }

    /// Natural size from the last measure.
    pub fn desired_size(&self) -> Size {
        Element::desired_size(&self.inner)
    }

    /// Slot from the last arrange, before scaling.
    pub fn frame(&self) -> Rect {
        Element::frame(&self.inner)
    }

    fn measure_natural(&mut self) -> Size {
        Element::measure(&mut self.inner, f64::INFINITY, f64::INFINITY)
    }
}

/// Container that scales a single child according to a [`Stretch`] mode.
///
/// ```
/// use zenpanel::{Element, Leaf, Rect, Scale, Size, Stretch, Viewbox};
///
/// let mut viewbox = Viewbox::new().with_child(Box::new(Leaf::new(Size::new(100.0, 50.0))));
/// assert_eq!(viewbox.measure(50.0, 50.0), Size::new(50.0, 25.0));
///
/// let reserved = viewbox.arrange_children(Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(reserved, Size::new(50.0, 50.0));
/// assert_eq!(viewbox.transform().factors(), Scale::uniform(0.5));
/// ```
#[derive(Debug, Default)]
pub struct Viewbox {
    container: ScaleContainer,
    stretch: Stretch,
    direction: StretchDirection,
    pub(crate) props: LayoutProps,
    pub(crate) state: LayoutState,
}

impl Viewbox {
    /// Empty viewbox, [`Stretch::Uniform`] in [`StretchDirection::Both`].
    pub fn new() -> Self {
        Self {
            container: ScaleContainer::new(),
            stretch: Stretch::Uniform,
            direction: StretchDirection::Both,
            props: LayoutProps::new(),
            state: LayoutState::new(),
        }
    }

    pub fn with_props(mut self, props: LayoutProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn with_stretch_direction(mut self, direction: StretchDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_child(mut self, child: Box<dyn Element>) -> Self {
        self.container.inner.set_child(Some(child));
        self
    }

    pub fn stretch(&self) -> Stretch {
        self.stretch
    }

    pub fn stretch_direction(&self) -> StretchDirection {
        self.direction
    }

    /// Change the stretch mode; re-measure is requested only on change.
    pub fn set_stretch(&mut self, stretch: Stretch) {
        if self.stretch != stretch {
            self.stretch = stretch;
            #[cfg(feature = "tracing")]
            tracing::debug!(stretch = stretch.name(), "viewbox stretch changed");
            self.state.invalidate_measure();
        }
    }

    /// Change the stretch direction; re-measure is requested only on change.
    pub fn set_stretch_direction(&mut self, direction: StretchDirection) {
        if self.direction != direction {
            self.direction = direction;
            #[cfg(feature = "tracing")]
            tracing::debug!(direction = direction.name(), "viewbox direction changed");
            self.state.invalidate_measure();
        }
    }

    /// Replace the scaled child, returning the previous one.
    pub fn set_child(&mut self, child: Option<Box<dyn Element>>) -> Option<Box<dyn Element>> {
        let previous = self.container.inner.set_child(child);
        self.state.invalidate_measure();
        previous
    }

    pub fn take_child(&mut self) -> Option<Box<dyn Element>> {
        self.set_child(None)
    }

    pub fn child(&self) -> Option<&dyn Element> {
        self.container.inner.child()
    }

    pub fn child_mut(&mut self) -> Option<&mut (dyn Element + 'static)> {
        self.container.inner.child_mut()
    }

    /// The internal container holding the child.
    pub fn container(&self) -> &ScaleContainer {
        &self.container
    }

    /// Scale applied by the last arrange.
    pub fn transform(&self) -> ScaleTransform {
        self.container.transform
    }

    /// Natural size times the current scale: the area the content covers
    /// when drawn. May exceed the arranged bounds under [`Stretch::UniformToFill`].
    pub fn scaled_extent(&self) -> Size {
        self.container
            .desired_size()
            .scale(self.container.transform.factors())
    }

    pub fn props(&self) -> &LayoutProps {
        &self.props
    }

    /// Mutable access to the declared attributes; marks the viewbox for re-measure.
    pub fn props_mut(&mut self) -> &mut LayoutProps {
        self.state.invalidate_measure();
        &mut self.props
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Measure pass: the child's natural size mapped through the stretch
    /// mode, recorded in [`state`](Self::state).
    pub fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size {
        let natural = self.container.measure_natural();
        let desired = calculate_size(
            self.stretch,
            self.direction,
            Size::new(width_constraint, height_constraint),
            natural,
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            natural_width = natural.width,
            natural_height = natural.height,
            width = desired.width,
            height = desired.height,
            "viewbox measured"
        );
        self.state.record_measure(desired)
    }

    /// Arrange pass.
    ///
    /// Re-measures the container for its natural size, sets the scale
    /// transform for `bounds`, and arranges the container at its natural
    /// size from the origin. Returns `bounds`' size: the viewbox reserves
    /// what it was given, not the scaled content size.
    pub fn arrange_children(&mut self, bounds: Rect) -> Size {
        let natural = self.container.measure_natural();
        let scale = calculate_scaling(self.stretch, self.direction, bounds.size(), natural);
        self.container.transform.set(scale);
        Element::arrange(&mut self.container.inner, Rect::from_size(natural));
        #[cfg(feature = "tracing")]
        tracing::trace!(scale_x = scale.x, scale_y = scale.y, "viewbox arranged");
        self.state.record_arrange(bounds);
        bounds.size()
    }
}

impl_container_element!(Viewbox);
