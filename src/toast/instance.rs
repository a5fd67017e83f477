// SPDX-License-Identifier: MPL-2.0
//! One toast's lifecycle: constructed → shown → hiding → removed.
//!
//! A [`Toast`] is a cheap handle; clones share the same state. The close
//! handler and the auto-close timer each hold a clone, so a shown toast keeps
//! working after the caller drops theirs.
//!
//! `hide` is idempotent. It only acts while the toast is [`ToastState::Shown`]
//! and moves it to [`ToastState::Hiding`] under the state lock, so whichever
//! of the auto-close timer, a close click or a manual call gets there first
//! runs the slide-out, and every later call is a no-op.

use super::options::{resolve, PartialOptions, ToastOptions};
use super::Toaster;
use crate::config::defaults::{CLOSE_SELECTOR, HIDDEN_OFFSET, HIDE_ANIMATION};
use crate::error::{Error, Result};
use crate::registry::ContainerRegistry;
use crate::render::Render;
use crate::surface::{ElementId, Surface};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// Options resolved, nothing rendered yet.
    Constructed,
    /// Element inserted into its container.
    Shown,
    /// Slide-out animation in progress.
    Hiding,
    /// Element detached; the toast is inert.
    Removed,
}

struct Lifecycle {
    state: ToastState,
    element: Option<ElementId>,
    auto_close: Option<AbortHandle>,
}

struct Inner {
    id: ToastId,
    options: ToastOptions,
    surface: Arc<dyn Surface>,
    renderer: Arc<dyn Render>,
    registry: Arc<ContainerRegistry>,
    lifecycle: Mutex<Lifecycle>,
    state_tx: watch::Sender<ToastState>,
}

/// Handle to one toast notification.
#[derive(Clone)]
pub struct Toast {
    inner: Arc<Inner>,
}

impl Toast {
    /// Creates a toast on `toaster`'s page, resolving `options` against the
    /// process-wide configuration. Nothing is rendered until [`Toast::show`].
    pub fn new(toaster: &Toaster, message: Option<&str>, options: PartialOptions) -> Self {
        Self::with_options(toaster, resolve(message, options))
    }

    /// Creates a toast from already resolved options.
    pub fn with_options(toaster: &Toaster, options: ToastOptions) -> Self {
        let (state_tx, _) = watch::channel(ToastState::Constructed);
        Self {
            inner: Arc::new(Inner {
                id: ToastId::new(),
                options,
                surface: toaster.surface().clone(),
                renderer: toaster.renderer().clone(),
                registry: toaster.registry().clone(),
                lifecycle: Mutex::new(Lifecycle {
                    state: ToastState::Constructed,
                    element: None,
                    auto_close: None,
                }),
                state_tx,
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.inner.id
    }

    #[must_use]
    pub fn options(&self) -> &ToastOptions {
        &self.inner.options
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.lock().state
    }

    /// The rendered element, while the toast is shown or hiding.
    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        self.lock().element
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.inner
            .lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, lifecycle: &mut Lifecycle, state: ToastState) {
        lifecycle.state = state;
        self.inner.state_tx.send_replace(state);
    }

    /// Renders the toast and appends it to its position's container, arming
    /// the auto-close timer and the close button as configured.
    ///
    /// Each toast can be shown once; reuse fails with [`Error::AlreadyShown`].
    ///
    /// The auto-close timer runs on the current tokio runtime. Outside one the
    /// toast is still shown, but stays up until it is closed or hidden.
    pub fn show(&self) -> Result<()> {
        let mut lifecycle = self.lock();
        if lifecycle.state != ToastState::Constructed {
            return Err(Error::AlreadyShown(self.inner.id));
        }
        let options = &self.inner.options;

        let element = self.mount()?;
        lifecycle.element = Some(element);
        self.set_state(&mut lifecycle, ToastState::Shown);
        debug!(
            id = %self.inner.id,
            %element,
            position = %options.position(),
            kind = %options.toast_type(),
            "toast shown"
        );

        if !options.auto_close() {
            return Ok(());
        }
        match Handle::try_current() {
            Ok(runtime) => {
                let toast = self.clone();
                let delay = options.duration();
                let timer = runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    debug!(id = %toast.inner.id, "auto-close timer fired");
                    toast.hide();
                });
                lifecycle.auto_close = Some(timer.abort_handle());
            }
            Err(_) => {
                warn!(id = %self.inner.id, "no tokio runtime for the auto-close timer, toast stays until closed");
            }
        }
        Ok(())
    }

    /// Materialises the markup, binds the close control and appends the
    /// element. Leaves nothing behind on failure.
    fn mount(&self) -> Result<ElementId> {
        let inner = &self.inner;
        let markup = inner.renderer.render(&inner.options);
        let element = inner.surface.materialize(&markup)?;

        let attached = self.bind_close(element).and_then(|()| {
            let container = inner
                .registry
                .get_or_create(inner.surface.as_ref(), inner.options.position())?;
            inner.surface.append(container, element)
        });
        if let Err(err) = attached {
            inner.surface.remove(element);
            return Err(err);
        }
        Ok(element)
    }

    fn bind_close(&self, element: ElementId) -> Result<()> {
        if !self.inner.options.show_close() {
            return Ok(());
        }
        let toast = self.clone();
        self.inner.surface.on_click(
            element,
            CLOSE_SELECTOR,
            Arc::new(move || {
                debug!(id = %toast.inner.id, "close button clicked");
                toast.hide();
            }),
        )
    }

    /// Slides the toast out towards its edge and detaches it once the
    /// animation finishes. A no-op unless the toast is currently shown.
    pub fn hide(&self) {
        let mut lifecycle = self.lock();
        if lifecycle.state != ToastState::Shown {
            return;
        }
        let Some(element) = lifecycle.element else {
            return;
        };
        if let Some(timer) = lifecycle.auto_close.take() {
            timer.abort();
        }

        let side = self.inner.options.position().slide_direction();
        self.inner
            .surface
            .set_offset_style(element, side, HIDDEN_OFFSET, HIDE_ANIMATION);
        self.set_state(&mut lifecycle, ToastState::Hiding);
        debug!(id = %self.inner.id, %side, "toast hiding");

        match Handle::try_current() {
            Ok(runtime) => {
                let toast = self.clone();
                runtime.spawn(async move {
                    tokio::time::sleep(HIDE_ANIMATION).await;
                    let mut lifecycle = toast.lock();
                    toast.detach(&mut lifecycle);
                });
            }
            Err(_) => {
                warn!(id = %self.inner.id, "no tokio runtime for the hide animation, detaching immediately");
                self.detach(&mut lifecycle);
            }
        }
    }

    fn detach(&self, lifecycle: &mut Lifecycle) {
        if let Some(element) = lifecycle.element.take() {
            self.inner.surface.remove(element);
            debug!(id = %self.inner.id, %element, "toast removed");
        }
        self.set_state(lifecycle, ToastState::Removed);
    }

    /// Resolves once the toast's element has been detached.
    ///
    /// # Hangs
    ///
    /// Never resolves for a toast that is not hidden, including one whose
    /// `show` failed or was never called. Combine with
    /// [`tokio::time::timeout`] when that can happen.
    pub async fn hidden(&self) {
        let mut state = self.inner.state_tx.subscribe();
        let _ = state.wait_for(|state| *state == ToastState::Removed).await;
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.inner.id)
            .field("options", &self.inner.options)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
