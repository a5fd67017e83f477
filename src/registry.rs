// SPDX-License-Identifier: MPL-2.0
//! Per-position stacking containers.
//!
//! Every distinct toast position gets exactly one container element, created
//! lazily on first use, appended to the page root and reused by all later
//! toasts at that position. Containers are never removed, even when empty.
//!
//! Registries are process-wide, one per host surface: every [`Toaster`] built
//! on the same surface resolves to the same registry through
//! [`ContainerRegistry::for_surface`].
//!
//! [`Toaster`]: crate::toast::Toaster

use crate::error::Result;
use crate::render::escape;
use crate::surface::{ElementId, Surface};
use crate::toast::Position;
use std::ptr;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};
use tracing::debug;

/// Registries of every live surface. The weak handle keeps the surface's
/// allocation reserved, so its address cannot be reused by another surface
/// while the entry exists.
static REGISTRIES: LazyLock<Mutex<Vec<(Weak<dyn Surface>, Arc<ContainerRegistry>)>>> =
    LazyLock::new(|| Mutex::new(Vec::new()));

/// Maps container keys onto their container elements.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    /// Registered containers in creation order.
    containers: Mutex<Vec<(String, ElementId)>>,
}

impl ContainerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry of `surface`, creating it on first
    /// use. Entries of dropped surfaces are pruned on the way.
    pub fn for_surface(surface: &Arc<dyn Surface>) -> Arc<Self> {
        let mut registries = REGISTRIES.lock().unwrap_or_else(PoisonError::into_inner);
        registries.retain(|(owner, _)| owner.strong_count() > 0);

        let address = Arc::as_ptr(surface);
        if let Some((_, registry)) = registries
            .iter()
            .find(|(owner, _)| ptr::addr_eq(owner.as_ptr(), address))
        {
            return registry.clone();
        }

        let registry = Arc::new(Self::new());
        registries.push((Arc::downgrade(surface), registry.clone()));
        registry
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, ElementId)>> {
        self.containers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the container for `position`, creating and attaching it to the
    /// page root if this is the first toast there.
    ///
    /// The lookup and the creation happen under one lock, so concurrent first
    /// calls for the same position still produce a single container.
    pub fn get_or_create(&self, surface: &dyn Surface, position: &Position) -> Result<ElementId> {
        let key = position.container_key();
        let mut containers = self.lock();
        if let Some((_, container)) = containers.iter().find(|(existing, _)| *existing == key) {
            return Ok(*container);
        }

        let container = surface.materialize(&format!(r#"<div class="{}"></div>"#, escape(&key)))?;
        if let Err(err) = surface.append(surface.root(), container) {
            surface.remove(container);
            return Err(err);
        }
        debug!(%position, %container, "created toast container");
        containers.push((key, container));
        Ok(container)
    }

    /// Returns the container registered for `position`, if any.
    #[must_use]
    pub fn get(&self, position: &Position) -> Option<ElementId> {
        let key = position.container_key();
        self.lock()
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, container)| *container)
    }

    /// Registered `(key, container)` pairs in creation order.
    #[must_use]
    pub fn containers(&self) -> Vec<(String, ElementId)> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
