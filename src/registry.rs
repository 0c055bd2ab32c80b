//! One-shot registration of the container kinds with a host toolkit.

use core::sync::atomic::{AtomicBool, Ordering};

static REGISTERED: AtomicBool = AtomicBool::new(false);

/// The containers this crate provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Canvas,
    Decorator,
    Viewbox,
}

impl ContainerKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 3] = [Self::Canvas, Self::Decorator, Self::Viewbox];

    /// Type name as used in UI descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Canvas => "Canvas",
            Self::Decorator => "Decorator",
            Self::Viewbox => "Viewbox",
        }
    }

    /// Look up a kind by its type name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Make the container kinds known to the host. Idempotent.
pub fn register() {
    if !REGISTERED.swap(true, Ordering::AcqRel) {
        #[cfg(feature = "tracing")]
        for kind in ContainerKind::ALL {
            tracing::debug!(kind = kind.name(), "container registered");
        }
    }
}

/// Whether [`register`] has run.
pub fn is_registered() -> bool {
    REGISTERED.load(Ordering::Acquire)
}
