// SPDX-License-Identifier: MPL-2.0
//! Toast notifications: options, lifecycle and the promise bridge.
//!
//! # Components
//!
//! - [`options`] - `PartialOptions`, resolved `ToastOptions` and resolution
//! - [`instance`] - `Toast` lifecycle (show, auto-close, hide)
//! - [`toaster`] - `Toaster` page context tying surface, renderer and registry together
//! - [`promise`] - Promise bridge mapping an async operation onto toasts
//!
//! # Usage
//!
//! ```no_run
//! use corner_toast::surface::MemorySurface;
//! use corner_toast::toast::{PartialOptions, PromiseOptions, ToastType, Toaster};
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let toaster = Toaster::with_surface(Arc::new(MemorySurface::new()));
//!
//! // A success toast that closes itself after one second
//! toaster
//!     .toast(
//!         Some("Saved!"),
//!         PartialOptions::new().toast_type(ToastType::Success).duration_ms(1000),
//!     )
//!     .show()
//!     .expect("toast shown");
//!
//! // Pending → success/error toasts around an async operation
//! let saved = toaster
//!     .promise(
//!         async { Ok::<_, std::io::Error>(42) },
//!         PromiseOptions::new().pending("Saving...").success("Saved").error("Save failed"),
//!     )
//!     .await;
//! # }
//! ```

pub mod instance;
pub mod options;
pub mod promise;
pub mod toaster;

pub use instance::{Toast, ToastId, ToastState};
pub use options::{
    resolve, resolve_with, slide_direction, PartialOptions, Position, ToastOptions, ToastType,
};
pub use promise::PromiseOptions;
pub use toaster::Toaster;
