//! Single-child container that adds padding around its child.

use alloc::boxed::Box;

use crate::constraint::{adjust_for_fill, resolve_constraints};
use crate::element::{Element, LayoutProps, LayoutState, impl_container_element};
use crate::geometry::{Rect, Size, Thickness};

/// Wraps at most one child and insets it by the padding in [`LayoutProps`].
///
/// ```
/// use zenpanel::{Decorator, LayoutProps, Rect, Size, Thickness};
///
/// let mut decorator = Decorator::new().with_props(LayoutProps::new().padding(Thickness::uniform(4.0)));
/// assert_eq!(decorator.measure(f64::INFINITY, f64::INFINITY), Size::new(8.0, 8.0));
/// assert_eq!(
///     decorator.content_rect(Rect::new(0.0, 0.0, 20.0, 20.0)),
///     Rect::new(4.0, 4.0, 12.0, 12.0),
/// );
/// ```
#[derive(Default)]
pub struct Decorator {
    child: Option<Box<dyn Element>>,
    pub(crate) props: LayoutProps,
    pub(crate) state: LayoutState,
}

impl core::fmt::Debug for Decorator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Decorator")
            .field("has_child", &self.child.is_some())
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}

impl Decorator {
    /// An empty decorator with default props.
    pub fn new() -> Self {
        Self {
            child: None,
            props: LayoutProps::new(),
            state: LayoutState::new(),
        }
    }

    pub fn with_props(mut self, props: LayoutProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_child(mut self, child: Box<dyn Element>) -> Self {
        self.child = Some(child);
        self
    }

    /// Replace the child, returning the previous one.
    ///
    /// The old child is detached before the new one is attached; `None`
    /// leaves the decorator empty.
    pub fn set_child(&mut self, child: Option<Box<dyn Element>>) -> Option<Box<dyn Element>> {
        let previous = core::mem::replace(&mut self.child, child);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            had_child = previous.is_some(),
            has_child = self.child.is_some(),
            "decorator child replaced"
        );
        self.state.invalidate_measure();
        previous
    }

    /// Detach and return the child, leaving the decorator empty.
    pub fn take_child(&mut self) -> Option<Box<dyn Element>> {
        self.set_child(None)
    }

    pub fn child(&self) -> Option<&dyn Element> {
        self.child.as_deref()
    }

    pub fn child_mut(&mut self) -> Option<&mut (dyn Element + 'static)> {
        self.child.as_deref_mut()
    }

    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    pub fn props(&self) -> &LayoutProps {
        &self.props
    }

    /// Mutable access to the declared attributes; marks the decorator for re-measure.
    pub fn props_mut(&mut self) -> &mut LayoutProps {
        self.state.invalidate_measure();
        &mut self.props
    }

    pub fn set_padding(&mut self, padding: Thickness) {
        if self.props.padding != padding {
            self.props.padding = padding;
            self.state.invalidate_measure();
        }
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The child, unless there is none or it is collapsed.
    fn visible_child(&mut self) -> Option<&mut (dyn Element + 'static)> {
        self.child.as_deref_mut().filter(|c| !c.is_collapsed())
    }

    /// Measure pass.
    ///
    /// Without a (visible) child the desired size is exactly the padding.
    /// Otherwise the child is measured against the constraints minus the
    /// padding, its desired size is inflated by the padding, and each axis is
    /// resolved against the incoming constraint using the child's declared
    /// size as the explicit term and this decorator's min/max. The result is
    /// recorded in [`state`](Self::state).
    pub fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size {
        let padding = self.props.padding;
        let (min, max) = (self.props.min_size(), self.props.max_size());

        let desired = match self.visible_child() {
            None => Size::ZERO.inflate(padding),
            Some(child) => {
                let inner = Size::new(width_constraint, height_constraint).deflate(padding);
                child.measure(inner.width, inner.height);

                let measured = child.desired_size().inflate(padding);
                let explicit = child.props().explicit_size();
                Size::new(
                    resolve_constraints(
                        width_constraint,
                        explicit.width,
                        measured.width,
                        min.width,
                        max.width,
                    ),
                    resolve_constraints(
                        height_constraint,
                        explicit.height,
                        measured.height,
                        min.height,
                        max.height,
                    ),
                )
            }
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(width = desired.width, height = desired.height, "decorator measured");
        self.state.record_measure(desired)
    }

    /// The rect the child occupies when the decorator is arranged in `bounds`.
    ///
    /// `bounds` minus padding, grown to cover `bounds` on `Fill` axes, then
    /// inset by the padding from a zero origin.
    pub fn content_rect(&self, bounds: Rect) -> Rect {
        Rect::from_size(self.final_size(bounds)).deflate(self.props.padding)
    }

    fn final_size(&self, bounds: Rect) -> Size {
        adjust_for_fill(
            bounds.size().deflate(self.props.padding),
            bounds,
            self.props.horizontal,
            self.props.vertical,
        )
    }

    /// Arrange pass. Places the child (if any) in [`content_rect`](Self::content_rect)
    /// and returns the fill-adjusted size.
    pub fn arrange_children(&mut self, bounds: Rect) -> Size {
        let final_size = self.final_size(bounds);
        let content = self.content_rect(bounds);
        if let Some(child) = self.visible_child() {
            child.arrange(content);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = final_size.width,
            height = final_size.height,
            "decorator arranged"
        );
        self.state.record_arrange(bounds);
        final_size
    }
}

impl_container_element!(Decorator);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Alignment;
    use crate::element::{Leaf, Visibility};

    const INF: f64 = f64::INFINITY;

    fn leaf(w: f64, h: f64) -> Box<dyn Element> {
        Box::new(Leaf::new(Size::new(w, h)))
    }

    fn padded(p: f64) -> Decorator {
        Decorator::new().with_props(LayoutProps::new().padding(Thickness::uniform(p)))
    }

    // ── measure ─────────────────────────────────────────────────────────

    #[test]
    fn empty_measures_to_padding() {
        let mut d = padded(4.0);
        assert_eq!(d.measure(INF, INF), Size::new(8.0, 8.0));
        // Even under a tight constraint: no resolution without a child.
        assert_eq!(d.measure(2.0, 2.0), Size::new(8.0, 8.0));
    }

    #[test]
    fn child_size_inflated_by_padding() {
        let mut d = padded(4.0).with_child(leaf(30.0, 10.0));
        assert_eq!(d.measure(INF, INF), Size::new(38.0, 18.0));
    }

    #[test]
    fn child_measured_with_padding_deducted() {
        let mut d = padded(5.0).with_child(leaf(100.0, 100.0));
        d.measure(50.0, 60.0);
        assert_eq!(d.child().map(|c| c.desired_size()), Some(Size::new(40.0, 50.0)));
    }

    #[test]
    fn desired_capped_by_constraint() {
        let mut d = padded(5.0).with_child(leaf(100.0, 100.0));
        assert_eq!(d.measure(50.0, 60.0), Size::new(50.0, 60.0));
    }

    #[test]
    fn child_explicit_size_is_the_preference() {
        let child = Leaf::new(Size::new(30.0, 30.0)).with_props(LayoutProps::new().width(12.0));
        let mut d = padded(4.0).with_child(Box::new(child));
        // Width uses the child's declared 12; height the inflated 38.
        assert_eq!(d.measure(INF, INF), Size::new(12.0, 38.0));
    }

    #[test]
    fn own_min_wins() {
        let mut d = Decorator::new()
            .with_props(LayoutProps::new().min_width(80.0).max_height(5.0))
            .with_child(leaf(10.0, 10.0));
        assert_eq!(d.measure(50.0, INF), Size::new(80.0, 5.0));
    }

    #[test]
    fn collapsed_child_treated_as_absent() {
        let child = Leaf::new(Size::new(30.0, 30.0))
            .with_props(LayoutProps::new().visibility(Visibility::Collapsed));
        let mut d = padded(4.0).with_child(Box::new(child));
        assert_eq!(d.measure(INF, INF), Size::new(8.0, 8.0));
    }

    // ── arrange ─────────────────────────────────────────────────────────

    #[test]
    fn empty_content_rect_reported() {
        let mut d = padded(4.0);
        let bounds = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(d.content_rect(bounds), Rect::new(4.0, 4.0, 12.0, 12.0));
        assert_eq!(d.arrange_children(bounds), Size::new(20.0, 20.0));
    }

    #[test]
    fn child_arranged_in_content_rect() {
        let mut d = padded(4.0).with_child(leaf(5.0, 5.0));
        d.measure(INF, INF);
        d.arrange_children(Rect::new(0.0, 0.0, 20.0, 30.0));
        assert_eq!(
            d.child().map(|c| c.frame()),
            Some(Rect::new(4.0, 4.0, 12.0, 22.0))
        );
    }

    #[test]
    fn non_fill_alignment_keeps_deflated_size() {
        let mut d = Decorator::new()
            .with_props(
                LayoutProps::new()
                    .padding(Thickness::uniform(4.0))
                    .horizontal(Alignment::Start)
                    .vertical(Alignment::Start),
            )
            .with_child(leaf(5.0, 5.0));
        let bounds = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(d.arrange_children(bounds), Size::new(12.0, 12.0));
        assert_eq!(
            d.child().map(|c| c.frame()),
            Some(Rect::new(4.0, 4.0, 4.0, 4.0))
        );
    }

    #[test]
    fn padding_larger_than_bounds_clamps() {
        let d = Decorator::new().with_props(
            LayoutProps::new()
                .padding(Thickness::uniform(30.0))
                .horizontal(Alignment::Center)
                .vertical(Alignment::Center),
        );
        let r = d.content_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(r, Rect::new(30.0, 30.0, 0.0, 0.0));
    }

    // ── child swap ──────────────────────────────────────────────────────

    #[test]
    fn set_child_returns_previous() {
        let mut d = Decorator::new();
        assert!(d.set_child(Some(leaf(1.0, 1.0))).is_none());
        let old = d.set_child(Some(leaf(2.0, 2.0)));
        assert_eq!(old.map(|mut c| c.measure(INF, INF)), Some(Size::new(1.0, 1.0)));
        d.measure(INF, INF);
        assert_eq!(d.child().map(|c| c.desired_size()), Some(Size::new(2.0, 2.0)));
    }

    #[test]
    fn set_child_none_empties() {
        let mut d = padded(1.0).with_child(leaf(10.0, 10.0));
        assert!(d.take_child().is_some());
        assert!(!d.has_child());
        assert_eq!(d.measure(INF, INF), Size::new(2.0, 2.0));
    }

    #[test]
    fn set_child_invalidates_measure() {
        let mut d = Decorator::new();
        Element::measure(&mut d, INF, INF);
        assert!(!d.state().needs_measure());
        d.set_child(Some(leaf(1.0, 1.0)));
        assert!(d.state().needs_measure());
    }

    #[test]
    fn set_padding_invalidates_only_on_change() {
        let mut d = padded(2.0);
        Element::measure(&mut d, INF, INF);
        d.set_padding(Thickness::uniform(2.0));
        assert!(!d.state().needs_measure());
        d.set_padding(Thickness::uniform(3.0));
        assert!(d.state().needs_measure());
    }

    // ── element ─────────────────────────────────────────────────────────

    #[test]
    fn element_arrange_uses_local_coordinates() {
        let mut d = padded(2.0).with_child(leaf(5.0, 5.0));
        Element::measure(&mut d, INF, INF);
        Element::arrange(&mut d, Rect::new(100.0, 200.0, 10.0, 10.0));
        assert_eq!(Element::frame(&d), Rect::new(100.0, 200.0, 10.0, 10.0));
        assert_eq!(
            d.child().map(|c| c.frame()),
            Some(Rect::new(2.0, 2.0, 6.0, 6.0))
        );
    }

    #[test]
    fn direct_passes_record_state() {
        let mut d = padded(2.0).with_child(leaf(5.0, 5.0));
        assert_eq!(d.measure(INF, INF), Size::new(9.0, 9.0));
        assert!(!d.state().needs_measure());
        assert_eq!(Element::desired_size(&d), Size::new(9.0, 9.0));
        d.arrange_children(Rect::new(0.0, 0.0, 9.0, 9.0));
        assert!(!d.state().needs_arrange());
        d.set_padding(Thickness::uniform(3.0));
        assert!(d.state().needs_measure() && d.state().needs_arrange());
    }

    #[test]
    fn collapsed_decorator_measures_zero() {
        let mut d = Decorator::new()
            .with_props(
                LayoutProps::new()
                    .padding(Thickness::uniform(4.0))
                    .visibility(Visibility::Collapsed),
            )
            .with_child(leaf(5.0, 5.0));
        assert_eq!(Element::measure(&mut d, INF, INF), Size::ZERO);
    }
}
