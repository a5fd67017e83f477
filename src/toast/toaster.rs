// SPDX-License-Identifier: MPL-2.0
//! Page context shared by all toasts of one host document.

use super::instance::Toast;
use super::options::PartialOptions;
use crate::registry::ContainerRegistry;
use crate::render::{MarkupRenderer, Render};
use crate::surface::Surface;
use std::fmt;
use std::sync::Arc;

/// Ties a host surface, a renderer and the surface's container registry
/// together. Cloning is cheap. Every toaster on the same surface shares one
/// registry, so a position never gets two containers.
#[derive(Clone)]
pub struct Toaster {
    surface: Arc<dyn Surface>,
    renderer: Arc<dyn Render>,
    registry: Arc<ContainerRegistry>,
}

impl Toaster {
    pub fn new(surface: Arc<dyn Surface>, renderer: Arc<dyn Render>) -> Self {
        Self {
            registry: ContainerRegistry::for_surface(&surface),
            surface,
            renderer,
        }
    }

    /// Creates a toaster rendering with [`MarkupRenderer`].
    pub fn with_surface(surface: Arc<dyn Surface>) -> Self {
        Self::new(surface, Arc::new(MarkupRenderer))
    }

    /// Creates a toast on this page. See [`Toast::new`].
    pub fn toast(&self, message: Option<&str>, options: PartialOptions) -> Toast {
        Toast::new(self, message, options)
    }

    #[must_use]
    pub fn surface(&self) -> &Arc<dyn Surface> {
        &self.surface
    }

    #[must_use]
    pub fn renderer(&self) -> &Arc<dyn Render> {
        &self.renderer
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
