// SPDX-License-Identifier: MPL-2.0
//! Host document abstraction.
//!
//! The toast lifecycle never touches a concrete document. It goes through the
//! [`Surface`] trait, which exposes the handful of mutations a toast needs:
//! materialising markup, appending and removing elements, applying the
//! slide-out offset, and binding click handlers to a sub-element.
//!
//! [`MemorySurface`] is an in-memory document implementing the trait. It backs
//! the tests and the demo binary.

mod memory;

pub use memory::{MemorySurface, OffsetStyle, SurfaceEvent, JOURNAL_CAPACITY};

use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque handle to an element owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Horizontal edge an offset style is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// CSS property name for this side.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback bound to a click on an element.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Minimal document interface the toast lifecycle drives.
///
/// Implementations must be usable from any thread: timers fire on tokio
/// workers and call back into the surface.
pub trait Surface: Send + Sync {
    /// The page root all containers are appended to. Never removed.
    fn root(&self) -> ElementId;

    /// Turns markup into a detached element.
    fn materialize(&self, markup: &str) -> Result<ElementId>;

    /// Appends `element` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append(&self, parent: ElementId, element: ElementId) -> Result<()>;

    /// Detaches and discards `element`. Returns `false` if it was already gone.
    fn remove(&self, element: ElementId) -> bool;

    /// Applies a horizontal offset style, transitioning over `transition`.
    /// Returns `false` if the element is gone.
    fn set_offset_style(
        &self,
        element: ElementId,
        side: Side,
        value: &str,
        transition: Duration,
    ) -> bool;

    /// Binds `handler` to clicks on the sub-element of `element` matching
    /// `selector`. Fails when nothing matches.
    fn on_click(&self, element: ElementId, selector: &str, handler: ClickHandler) -> Result<()>;

    /// Whether `element` still exists in the document.
    fn contains(&self, element: ElementId) -> bool;
}
