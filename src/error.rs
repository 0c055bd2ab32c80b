//! Errors from container bookkeeping.
//!
//! Measure and arrange are total and never fail. Only the operations that
//! address a child by handle, or that parse configuration values, can.

use core::fmt;

use whereat::At;

use crate::element::ChildId;

/// Container operation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The handle does not belong to a child of this container.
    UnknownChild(ChildId),
    /// A position coordinate was infinite. Use NaN to clear a coordinate.
    NonFiniteCoordinate,
    /// A stretch mode or direction name was not recognized.
    UnrecognizedValue,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChild(id) => write!(f, "no child with id {}", id.get()),
            Self::NonFiniteCoordinate => f.write_str("coordinate must be finite or NaN (unset)"),
            Self::UnrecognizedValue => f.write_str("unrecognized enumeration value"),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Result of a fallible container operation; the error records where it was raised.
pub type LayoutResult<T> = Result<T, At<LayoutError>>;
