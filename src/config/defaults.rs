// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! This module is the single source of truth for the values a toast falls
//! back to when the caller leaves an option unset, and for the fixed class
//! names the rendered markup and the container registry agree on.
//!
//! # Categories
//!
//! - **Options**: Values used to fill unset toast options
//! - **Promise**: Messages used by the promise bridge
//! - **Animation**: Slide-out timing and offset
//! - **Markup**: Class names shared between renderer, registry and surface

use std::time::Duration;

// ==========================================================================
// Option Defaults
// ==========================================================================

/// Message shown when a toast is created without one.
pub const DEFAULT_MESSAGE: &str = "This is a toast notification!";

/// Whether toasts close themselves after [`DEFAULT_DURATION_MS`].
pub const DEFAULT_AUTO_CLOSE: bool = true;

/// Whether toasts use the coloured variant of their type styling.
pub const DEFAULT_COLOURFUL: bool = false;

/// Auto-close delay in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Screen corner toasts stack in.
pub const DEFAULT_POSITION: &str = "top-right";

/// Whether toasts render a close button.
pub const DEFAULT_SHOW_CLOSE: bool = true;

/// Toast type used when the caller sets none.
pub const DEFAULT_TYPE: &str = "notice";

// ==========================================================================
// Promise Defaults
// ==========================================================================

/// Message of the pending toast while an observed operation runs.
pub const DEFAULT_PENDING_MESSAGE: &str = "Loading...";

/// Message of the success toast when the caller sets none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success!";

/// Message of the error toast when the caller sets none.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong.";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Length of the slide-out animation in milliseconds.
pub const HIDE_ANIMATION_MS: u64 = 400;

/// Length of the slide-out animation.
pub const HIDE_ANIMATION: Duration = Duration::from_millis(HIDE_ANIMATION_MS);

/// Horizontal offset a hidden toast slides to, relative to its own width.
pub const HIDDEN_OFFSET: &str = "-100%";

// ==========================================================================
// Markup Defaults
// ==========================================================================

/// Base class of every position container.
pub const CONTAINER_CLASS: &str = "mw-toast-notification-container";

/// Base class of every toast root element.
pub const TOAST_CLASS: &str = "mw-toast-notification";

/// Class of the close control inside a toast.
pub const CLOSE_CLASS: &str = "mw-toast-notification__close";

/// Selector the close handler is bound through.
pub const CLOSE_SELECTOR: &str = ".mw-toast-notification__close";
