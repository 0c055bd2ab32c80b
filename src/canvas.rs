//! Absolute-positioning container.
//!
//! Each child carries up to four edge coordinates ([`CanvasEdges`]). On each
//! axis the near edge wins: `left` over `right`, `top` over `bottom`. A child
//! with neither coordinate on an axis sits at 0 on that axis. Children are
//! always measured at their natural size and arranged at it; the canvas
//! positions but never resizes them.
//!
//! ```text
//!   ┌──────────── final width ─────────────┐
//!   │ left ─▶┌─────┐                       │
//!   │        │  a  │          ┌─────┐◀ right│
//!   │        └─────┘          │  b  │       │
//!   │                         └─────┘       │
//!   └───────────────────────────────────────┘
//! ```
//!
//! The canvas's own desired size ignores its children entirely: it is its
//! padding, resolved against its declared size, min/max, and the constraint.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::constraint::{adjust_for_fill, resolve_constraints};
use crate::element::{ChildId, Element, LayoutProps, LayoutState, impl_container_element};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{Point, Rect, Size, Thickness, is_unset};

/// Edge coordinates positioning one child inside a [`Canvas`].
///
/// `None` means unset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CanvasEdges {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl CanvasEdges {
    /// All four coordinates unset: the child sits at the top-left corner.
    pub const UNSET: Self = Self {
        left: None,
        top: None,
        right: None,
        bottom: None,
    };

    /// From raw lengths where NaN means unset.
    pub fn from_raw(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: set_or_none(left),
            top: set_or_none(top),
            right: set_or_none(right),
            bottom: set_or_none(bottom),
        }
    }

    pub fn left(mut self, left: f64) -> Self {
        self.left = set_or_none(left);
        self
    }

    pub fn top(mut self, top: f64) -> Self {
        self.top = set_or_none(top);
        self
    }

    pub fn right(mut self, right: f64) -> Self {
        self.right = set_or_none(right);
        self
    }

    pub fn bottom(mut self, bottom: f64) -> Self {
        self.bottom = set_or_none(bottom);
        self
    }

    /// X offset for a child of `desired_width` inside `final_width`.
    pub fn horizontal_offset(&self, final_width: f64, desired_width: f64) -> f64 {
        offset(self.left, self.right, final_width, desired_width)
    }

    /// Y offset for a child of `desired_height` inside `final_height`.
    pub fn vertical_offset(&self, final_height: f64, desired_height: f64) -> f64 {
        offset(self.top, self.bottom, final_height, desired_height)
    }

    /// Top-left corner of a child of size `desired` inside `final_size`.
    pub fn position(&self, final_size: Size, desired: Size) -> Point {
        Point::new(
            self.horizontal_offset(final_size.width, desired.width),
            self.vertical_offset(final_size.height, desired.height),
        )
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let finite = [self.left, self.top, self.right, self.bottom]
            .into_iter()
            .flatten()
            .all(f64::is_finite);
        if finite {
            Ok(())
        } else {
            Err(LayoutError::NonFiniteCoordinate)
        }
    }
}

fn set_or_none(length: f64) -> Option<f64> {
    if is_unset(length) { None } else { Some(length) }
}

fn offset(near: Option<f64>, far: Option<f64>, extent: f64, desired: f64) -> f64 {
    match (near, far) {
        (Some(near), _) => near,
        (None, Some(far)) => extent - desired - far,
        (None, None) => 0.0,
    }
}

/// Which edge a single-coordinate setter writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

struct Slot {
    id: ChildId,
    element: Box<dyn Element>,
    edges: CanvasEdges,
}

/// Container that positions each child independently by edge coordinates.
///
/// ```
/// use zenpanel::{Canvas, CanvasEdges, Element, Leaf, Rect, Size};
///
/// let mut canvas = Canvas::new();
/// let id = canvas.push_with_edges(
///     Box::new(Leaf::new(Size::new(20.0, 20.0))),
///     CanvasEdges::default().right(10.0).top(5.0),
/// );
/// canvas.measure(100.0, 100.0);
/// canvas.arrange_children(Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(canvas.child(id).map(|c| c.frame()), Some(Rect::new(70.0, 5.0, 20.0, 20.0)));
/// ```
#[derive(Default)]
pub struct Canvas {
    slots: Vec<Slot>,
    next_id: u64,
    pub(crate) props: LayoutProps,
    pub(crate) state: LayoutState,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("children", &self.slots.len())
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}

impl Canvas {
    /// An empty canvas with default props.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            props: LayoutProps::new(),
            state: LayoutState::new(),
        }
    }

    pub fn with_props(mut self, props: LayoutProps) -> Self {
        self.props = props;
        self
    }

    /// Append a child with no coordinates set.
    pub fn push(&mut self, child: Box<dyn Element>) -> ChildId {
        self.push_with_edges(child, CanvasEdges::UNSET)
    }

    /// Append a child at the given coordinates.
    ///
    /// Infinite coordinates are dropped (treated as unset).
    pub fn push_with_edges(&mut self, child: Box<dyn Element>, edges: CanvasEdges) -> ChildId {
        let id = ChildId::new(self.next_id);
        self.next_id += 1;
        let edges = if edges.validate().is_ok() {
            edges
        } else {
            sanitize(edges)
        };
        self.slots.push(Slot {
            id,
            element: child,
            edges,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.get(), "canvas child added");
        self.state.invalidate_measure();
        id
    }

    /// Detach a child and hand it back.
    pub fn remove(&mut self, id: ChildId) -> LayoutResult<Box<dyn Element>> {
        let index = self.index_of(id)?;
        let slot = self.slots.remove(index);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.get(), "canvas child removed");
        self.state.invalidate_measure();
        Ok(slot.element)
    }

    /// Detach every child.
    pub fn clear(&mut self) {
        if !self.slots.is_empty() {
            self.slots.clear();
            self.state.invalidate_measure();
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Child handles in collection (paint) order.
    pub fn ids(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    pub fn contains(&self, id: ChildId) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    pub fn child(&self, id: ChildId) -> Option<&dyn Element> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.element.as_ref())
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn Element + 'static)> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| s.element.as_mut())
    }

    pub fn edges(&self, id: ChildId) -> Option<CanvasEdges> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.edges)
    }

    /// Replace all four coordinates of a child.
    pub fn set_edges(&mut self, id: ChildId, edges: CanvasEdges) -> LayoutResult<()> {
        edges.validate().map_err(|e| whereat::at!(e))?;
        let index = self.index_of(id)?;
        self.slots[index].edges = edges;
        self.state.invalidate_arrange();
        Ok(())
    }

    /// Set the left coordinate; NaN clears it.
    pub fn set_left(&mut self, id: ChildId, left: f64) -> LayoutResult<()> {
        self.set_edge(id, Edge::Left, left)
    }

    /// Set the top coordinate; NaN clears it.
    pub fn set_top(&mut self, id: ChildId, top: f64) -> LayoutResult<()> {
        self.set_edge(id, Edge::Top, top)
    }

    /// Set the right coordinate; NaN clears it.
    pub fn set_right(&mut self, id: ChildId, right: f64) -> LayoutResult<()> {
        self.set_edge(id, Edge::Right, right)
    }

    /// Set the bottom coordinate; NaN clears it.
    pub fn set_bottom(&mut self, id: ChildId, bottom: f64) -> LayoutResult<()> {
        self.set_edge(id, Edge::Bottom, bottom)
    }

    fn set_edge(&mut self, id: ChildId, edge: Edge, value: f64) -> LayoutResult<()> {
        if value.is_infinite() {
            return Err(whereat::at!(LayoutError::NonFiniteCoordinate));
        }
        let index = self.index_of(id)?;
        let edges = &mut self.slots[index].edges;
        let value = set_or_none(value);
        match edge {
            Edge::Left => edges.left = value,
            Edge::Top => edges.top = value,
            Edge::Right => edges.right = value,
            Edge::Bottom => edges.bottom = value,
        }
        self.state.invalidate_arrange();
        Ok(())
    }

    fn index_of(&self, id: ChildId) -> LayoutResult<usize> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| whereat::at!(LayoutError::UnknownChild(id)))
    }

    pub fn props(&self) -> &LayoutProps {
        &self.props
    }

    /// Mutable access to the declared attributes; marks the canvas for re-measure.
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

    /// Measure pass.
    ///
    /// Every visible child is measured at infinite constraints. The result
    /// depends only on padding, declared size, min/max, and the constraint,
    /// and is recorded in [`state`](Self::state).
    pub fn measure(&mut self, width_constraint: f64, height_constraint: f64) -> Size {
        for slot in self.slots.iter_mut().filter(|s| !s.element.is_collapsed()) {
            slot.element.measure(f64::INFINITY, f64::INFINITY);
        }

        let padding = self.props.padding;
        let desired = Size::new(
            resolve_constraints(
                width_constraint,
                self.props.width,
                padding.horizontal_thickness(),
                self.props.min_width,
                self.props.max_width,
            ),
            resolve_constraints(
                height_constraint,
                self.props.height,
                padding.vertical_thickness(),
                self.props.min_height,
                self.props.max_height,
            ),
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            children = self.slots.len(),
            width = desired.width,
            height = desired.height,
            "canvas measured"
        );
        self.state.record_measure(desired)
    }

    /// Arrange pass.
    ///
    /// The content size is `bounds` minus padding, grown to cover `bounds`
    /// on `Fill` axes. Each visible child is placed at its edge-derived
    /// offset with its desired size. Returns the content size.
    ///
    /// Padding wider than `bounds` leaves a zero content size, not a
    /// negative one, so `right`/`bottom` offsets count from 0 in that case.
    pub fn arrange_children(&mut self, bounds: Rect) -> Size {
        let final_size = adjust_for_fill(
            bounds.size().deflate(self.props.padding),
            bounds,
            self.props.horizontal,
            self.props.vertical,
        );

        for slot in self.slots.iter_mut().filter(|s| !s.element.is_collapsed()) {
            let desired = slot.element.desired_size();
            let origin = slot.edges.position(final_size, desired);
            slot.element.arrange(Rect::from_origin_size(origin, desired));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = final_size.width,
            height = final_size.height,
            "canvas arranged"
        );
        self.state.record_arrange(bounds);
        final_size
    }
}

fn sanitize(edges: CanvasEdges) -> CanvasEdges {
    let keep = |v: Option<f64>| v.filter(|v| v.is_finite());
    CanvasEdges {
        left: keep(edges.left),
        top: keep(edges.top),
        right: keep(edges.right),
        bottom: keep(edges.bottom),
    }
}

impl_container_element!(Canvas);
