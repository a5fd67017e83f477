// SPDX-License-Identifier: MPL-2.0
//! Icon markup fragments used by toasts.
//!
//! Icons are inline SVG so the rendered toast carries no external asset
//! references. Each toast type has a preset registered under the type's name;
//! the process-wide type table starts from [`presets`] and can be extended at
//! runtime through [`crate::config::set_type_icon`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the glyph (e.g., `check_circle`),
//! while the preset table maps toast types onto them.

use std::collections::BTreeMap;

/// Defines a public icon constant from its inline markup.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $markup:literal) => {
        #[doc = $doc]
        pub const $name: &str = $markup;
    };
}

// =============================================================================
// Status Icons
// =============================================================================

define_icon!(
    INFO_CIRCLE,
    "Info icon: lowercase i inside a circle.",
    r#"<svg class="mw-toast-icon" viewBox="0 0 20 20" aria-hidden="true"><circle cx="10" cy="10" r="9" fill="none" stroke="currentColor" stroke-width="2"/><path d="M10 9v5M10 6h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#
);
define_icon!(
    CHECK_CIRCLE,
    "Success icon: checkmark inside a circle.",
    r#"<svg class="mw-toast-icon" viewBox="0 0 20 20" aria-hidden="true"><circle cx="10" cy="10" r="9" fill="none" stroke="currentColor" stroke-width="2"/><path d="M6 10.5l2.5 2.5L14 7.5" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#
);
define_icon!(
    ALERT_TRIANGLE,
    "Error icon: exclamation mark inside a triangle.",
    r#"<svg class="mw-toast-icon" viewBox="0 0 20 20" aria-hidden="true"><path d="M10 2L19 18H1z" fill="none" stroke="currentColor" stroke-width="2" stroke-linejoin="round"/><path d="M10 8v4M10 15h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#
);
define_icon!(
    BELL,
    "Generic bell, used when no preset matches the toast type.",
    r#"<svg class="mw-toast-icon" viewBox="0 0 20 20" aria-hidden="true"><path d="M5 14V9a5 5 0 0110 0v5l2 2H3z" fill="none" stroke="currentColor" stroke-width="2" stroke-linejoin="round"/><path d="M8 18h4" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#
);

/// Icon used when neither the caller nor the type table provides one.
pub const DEFAULT_ICON: &str = BELL;

/// Returns the built-in type → icon table.
#[must_use]
pub fn presets() -> BTreeMap<String, String> {
    [
        ("notice", INFO_CIRCLE),
        ("success", CHECK_CIRCLE),
        ("error", ALERT_TRIANGLE),
    ]
    .into_iter()
    .map(|(kind, icon)| (kind.to_string(), icon.to_string()))
    .collect()
}
