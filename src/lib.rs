// SPDX-License-Identifier: MPL-2.0
//! `corner_toast` renders transient toast notifications into a host document.
//!
//! Toasts stack in per-corner containers, slide out when hidden, optionally
//! close themselves after a delay, and can follow an async operation from a
//! pending notice to a success or error outcome. The host document is reached
//! through the [`surface::Surface`] trait, so the lifecycle runs the same
//! against a browser binding or the bundled in-memory document.

pub mod config;
pub mod error;
pub mod icons;
pub mod registry;
pub mod render;
pub mod surface;
pub mod toast;

pub use error::{Error, Result};
pub use toast::{PartialOptions, PromiseOptions, Toast, ToastOptions, ToastType, Toaster};
