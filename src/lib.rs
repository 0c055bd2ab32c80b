//! Measure/arrange layout containers for retained-mode UI toolkits.
//!
//! Pure geometry with no rendering. Works under `no_std`; the containers need `alloc`.
//!
//! # Modules
//!
//! - [`geometry`]: Size, Rect, Thickness, inflate/deflate
//! - [`constraint`]: Resolving a desired length from constraint, declared size, min/max
//! - [`element`]: The two-pass measure/arrange protocol and per-element state
//! - [`stretch`]: Stretch modes, direction clamping, size and scale computation
//! - [`canvas`]: Absolute positioning by edge coordinates (`alloc`)
//! - [`decorator`]: Single child with padding (`alloc`)
//! - [`viewbox`]: Single child scaled to the available space (`alloc`)
//! - [`error`]: Layout errors with source locations
//! - [`registry`]: Host registration hook

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

whereat::define_at_crate_info!();

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constraint;
pub mod element;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod stretch;

#[cfg(feature = "alloc")]
pub mod canvas;
#[cfg(feature = "alloc")]
pub mod decorator;
#[cfg(feature = "alloc")]
pub mod viewbox;

// Re-exports: core types
pub use constraint::{Alignment, adjust_for_fill, resolve_constraints};
pub use element::{ChildId, Element, LayoutManager, LayoutProps, LayoutState, Leaf, Visibility};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{Point, Rect, Size, Thickness, UNSET, is_unset};
pub use registry::{ContainerKind, register};
pub use stretch::{Scale, Stretch, StretchDirection, calculate_scaling, calculate_size};

#[cfg(feature = "alloc")]
pub use canvas::{Canvas, CanvasEdges};
#[cfg(feature = "alloc")]
pub use decorator::Decorator;
#[cfg(feature = "alloc")]
pub use viewbox::{ScaleContainer, ScaleTransform, Viewbox};
