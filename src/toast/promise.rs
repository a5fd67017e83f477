// SPDX-License-Identifier: MPL-2.0
//! Promise bridge: mirrors an asynchronous operation as a sequence of toasts.
//!
//! A pending notice appears as soon as the bridge is set up. When the
//! operation settles, the pending toast is hidden and a success or error
//! toast takes its place. The operation's output passes through untouched.

use super::options::{PartialOptions, ToastType};
use super::{Toast, Toaster};
use crate::config::defaults::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_PENDING_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
use futures_util::FutureExt;
use std::future::Future;
use tracing::{debug, warn};

/// Messages and option overrides for [`Toaster::promise`].
#[derive(Debug, Clone, Default)]
pub struct PromiseOptions {
    pub pending_message: Option<String>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    /// Applied on top of the pending toast's options. Terminal toasts only
    /// inherit `position` and `colourful`.
    pub overrides: PartialOptions,
}

impl PromiseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(mut self, message: impl Into<String>) -> Self {
        self.pending_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn success(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn overrides(mut self, overrides: PartialOptions) -> Self {
        self.overrides = overrides;
        self
    }

    fn pending_options(&self) -> PartialOptions {
        PartialOptions::new()
            .toast_type(ToastType::Notice)
            .auto_close(false)
            .show_close(false)
            .merge(self.overrides.clone())
    }

    fn terminal_options(&self, toast_type: ToastType) -> PartialOptions {
        PartialOptions {
            toast_type: Some(toast_type),
            position: self.overrides.position.clone(),
            colourful: self.overrides.colourful,
            ..PartialOptions::default()
        }
    }
}

impl Toaster {
    /// Shows a pending toast now and returns `operation` wrapped so that, on
    /// settlement, the pending toast is hidden and exactly one success or
    /// error toast is shown.
    ///
    /// The returned future yields the operation's result unchanged, errors
    /// included. The bridge cannot cancel the operation; dropping the
    /// returned future before it settles leaves the pending toast up.
    pub fn promise<F, T, E>(
        &self,
        operation: F,
        options: PromiseOptions,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        let pending = self.toast(
            Some(
                options
                    .pending_message
                    .as_deref()
                    .unwrap_or(DEFAULT_PENDING_MESSAGE),
            ),
            options.pending_options(),
        );
        show_or_warn(&pending);

        let toaster = self.clone();
        operation.map(move |result| {
            pending.hide();
            let (message, toast_type) = match &result {
                Ok(_) => (
                    options.success_message.as_deref().unwrap_or(DEFAULT_SUCCESS_MESSAGE),
                    ToastType::Success,
                ),
                Err(_) => (
                    options.error_message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE),
                    ToastType::Error,
                ),
            };
            debug!(pending = %pending.id(), outcome = %toast_type, "observed operation settled");
            let terminal = toaster.toast(Some(message), options.terminal_options(toast_type));
            show_or_warn(&terminal);
            result
        })
    }
}

fn show_or_warn(toast: &Toast) {
    if let Err(err) = toast.show() {
        warn!(id = %toast.id(), error = %err, "failed to show promise toast");
    }
}
