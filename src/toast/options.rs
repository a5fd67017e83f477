// SPDX-License-Identifier: MPL-2.0
//! Toast options and their resolution against the configured defaults.
//!
//! Callers describe a toast with a [`PartialOptions`] record where every field
//! is optional. [`resolve_with`] fills the gaps from a [`ToastConfig`] and
//! produces the immutable [`ToastOptions`] that drives one toast instance.

use crate::config::{self, defaults, ToastConfig};
use crate::surface::Side;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Kind of toast; selects styling and the preset icon.
///
/// Unknown names are kept verbatim in [`ToastType::Other`] so they still
/// reach the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastType {
    /// Neutral information (the default type).
    #[default]
    Notice,
    /// Outcome of a completed operation.
    Success,
    /// Outcome of a failed operation.
    Error,
    /// Any other type name.
    Other(String),
}

impl ToastType {
    /// Returns the type name used in class names and the icon table.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ToastType::Notice => "notice",
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Other(name) => name,
        }
    }
}

impl From<&str> for ToastType {
    fn from(name: &str) -> Self {
        match name {
            "notice" => ToastType::Notice,
            "success" => ToastType::Success,
            "error" => ToastType::Error,
            other => ToastType::Other(other.to_string()),
        }
    }
}

impl From<String> for ToastType {
    fn from(name: String) -> Self {
        ToastType::from(name.as_str())
    }
}

impl From<ToastType> for String {
    fn from(kind: ToastType) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ToastType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ToastType::from(s))
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen position a toast stacks in. Each distinct position gets its own
/// container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Any other position name, used verbatim as the container modifier class.
    Other(String),
}

impl Position {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
            Position::Other(name) => name,
        }
    }

    /// Key the container registry looks containers up by: the base container
    /// class followed by the position modifier class.
    #[must_use]
    pub fn container_key(&self) -> String {
        format!("{} {}", defaults::CONTAINER_CLASS, self.as_str())
    }

    /// Side this position's toasts slide out towards.
    #[must_use]
    pub fn slide_direction(&self) -> Side {
        slide_direction(self.as_str())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::from(defaults::DEFAULT_POSITION)
    }
}

impl From<&str> for Position {
    fn from(name: &str) -> Self {
        match name {
            "top-left" => Position::TopLeft,
            "top-center" => Position::TopCenter,
            "top-right" => Position::TopRight,
            "bottom-left" => Position::BottomLeft,
            "bottom-center" => Position::BottomCenter,
            "bottom-right" => Position::BottomRight,
            other => Position::Other(other.to_string()),
        }
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Position::from(name.as_str())
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from(s))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Works out which edge a toast slides out towards.
///
/// Anything mentioning "left" goes left; everything else, centred and
/// unrecognised positions included, goes right.
#[must_use]
pub fn slide_direction(position: &str) -> Side {
    if position.contains("left") {
        Side::Left
    } else {
        Side::Right
    }
}

/// Caller-supplied toast options. Unset fields are filled at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialOptions {
    pub toast_type: Option<ToastType>,
    pub auto_close: Option<bool>,
    pub duration_ms: Option<u64>,
    pub position: Option<Position>,
    pub show_close: Option<bool>,
    pub colourful: Option<bool>,
    /// Explicit icon markup, taking precedence over the type preset.
    pub icon: Option<String>,
}

impl PartialOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toast_type(mut self, toast_type: impl Into<ToastType>) -> Self {
        self.toast_type = Some(toast_type.into());
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = Some(show_close);
        self
    }

    #[must_use]
    pub fn colourful(mut self, colourful: bool) -> Self {
        self.colourful = Some(colourful);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Layers `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: PartialOptions) -> Self {
        Self {
            toast_type: other.toast_type.or(self.toast_type),
            auto_close: other.auto_close.or(self.auto_close),
            duration_ms: other.duration_ms.or(self.duration_ms),
            position: other.position.or(self.position),
            show_close: other.show_close.or(self.show_close),
            colourful: other.colourful.or(self.colourful),
            icon: other.icon.or(self.icon),
        }
    }
}

/// Fully resolved options of one toast. Every field has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastOptions {
    message: String,
    #[serde(rename = "type")]
    toast_type: ToastType,
    auto_close: bool,
    duration_ms: u64,
    position: Position,
    show_close: bool,
    colourful: bool,
    icon: String,
}

impl ToastOptions {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn toast_type(&self) -> &ToastType {
        &self.toast_type
    }

    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Auto-close delay as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn show_close(&self) -> bool {
        self.show_close
    }

    #[must_use]
    pub fn colourful(&self) -> bool {
        self.colourful
    }

    /// Icon markup; trusted and rendered as-is.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// Resolves options against the process-wide configuration.
#[must_use]
pub fn resolve(message: Option<&str>, options: PartialOptions) -> ToastOptions {
    resolve_with(&config::current(), message, options)
}

/// Resolves options against an explicit configuration snapshot.
///
/// Icon precedence: explicit `options.icon`, then the type preset from
/// `config.types`, then the global default icon.
#[must_use]
pub fn resolve_with(
    config: &ToastConfig,
    message: Option<&str>,
    options: PartialOptions,
) -> ToastOptions {
    let base = &config.defaults;
    let toast_type = options
        .toast_type
        .unwrap_or_else(|| base.toast_type.clone());
    let icon = options
        .icon
        .or_else(|| config.types.get(toast_type.as_str()).cloned())
        .unwrap_or_else(|| base.icon.clone());

    ToastOptions {
        message: message.unwrap_or(defaults::DEFAULT_MESSAGE).to_string(),
        auto_close: options.auto_close.unwrap_or(base.auto_close),
        duration_ms: options.duration_ms.unwrap_or(base.duration_ms),
        position: options.position.unwrap_or_else(|| base.position.clone()),
        show_close: options.show_close.unwrap_or(base.show_close),
        colourful: options.colourful.unwrap_or(base.colourful),
        toast_type,
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let config = ToastConfig::default();
        let options = resolve_with(&config, None, PartialOptions::new());

        assert_eq!(options.message(), defaults::DEFAULT_MESSAGE);
        assert_eq!(options.toast_type(), &ToastType::Notice);
        assert_eq!(options.auto_close(), defaults::DEFAULT_AUTO_CLOSE);
        assert_eq!(options.duration_ms(), defaults::DEFAULT_DURATION_MS);
        assert_eq!(options.position(), &Position::TopRight);
        assert_eq!(options.show_close(), defaults::DEFAULT_SHOW_CLOSE);
        assert_eq!(options.colourful(), defaults::DEFAULT_COLOURFUL);
        assert_eq!(options.icon(), icons::INFO_CIRCLE);
    }

    #[test]
    fn present_fields_override_defaults() {
        let config = ToastConfig::default();
        let options = resolve_with(
            &config,
            Some("Saved!"),
            PartialOptions::new()
                .toast_type(ToastType::Success)
                .auto_close(false)
                .duration_ms(1000)
                .position(Position::BottomLeft)
                .show_close(false)
                .colourful(true),
        );

        assert_eq!(options.message(), "Saved!");
        assert_eq!(options.toast_type(), &ToastType::Success);
        assert!(!options.auto_close());
        assert_eq!(options.duration(), Duration::from_secs(1));
        assert_eq!(options.position(), &Position::BottomLeft);
        assert!(!options.show_close());
        assert!(options.colourful());
    }

    #[test]
    fn builtin_types_pick_their_preset_icon() {
        let config = ToastConfig::default();
        for kind in [ToastType::Notice, ToastType::Success, ToastType::Error] {
            let options = resolve_with(&config, None, PartialOptions::new().toast_type(kind.clone()));
            assert_eq!(Some(options.icon()), config.types.get(kind.as_str()).map(String::as_str));
        }
    }

    #[test]
    fn unknown_type_falls_back_to_default_icon_and_keeps_name() {
        let config = ToastConfig::default();
        let options = resolve_with(&config, None, PartialOptions::new().toast_type("warning"));

        assert_eq!(options.toast_type(), &ToastType::Other("warning".into()));
        assert_eq!(options.toast_type().as_str(), "warning");
        assert_eq!(options.icon(), icons::DEFAULT_ICON);
    }

    #[test]
    fn explicit_icon_wins_over_type_preset() {
        let config = ToastConfig::default();
        let options = resolve_with(
            &config,
            None,
            PartialOptions::new().toast_type(ToastType::Error).icon("<i>!</i>"),
        );
        assert_eq!(options.icon(), "<i>!</i>");
    }

    #[test]
    fn configured_defaults_are_used_for_unset_fields() {
        let mut config = ToastConfig::default();
        config.defaults.position = Position::BottomCenter;
        config.defaults.duration_ms = 750;

        let options = resolve_with(&config, Some("hi"), PartialOptions::new());
        assert_eq!(options.position(), &Position::BottomCenter);
        assert_eq!(options.duration_ms(), 750);
    }

    #[test]
    fn zero_duration_is_passed_through() {
        let config = ToastConfig::default();
        let options = resolve_with(&config, None, PartialOptions::new().duration_ms(0));
        assert_eq!(options.duration(), Duration::ZERO);
    }

    #[test]
    fn slide_direction_is_a_two_way_branch() {
        assert_eq!(slide_direction("bottom-left"), Side::Left);
        assert_eq!(slide_direction("top-left"), Side::Left);
        assert_eq!(slide_direction("top-right"), Side::Right);
        assert_eq!(slide_direction("middle"), Side::Right);
        assert_eq!(Position::BottomCenter.slide_direction(), Side::Right);
    }

    #[test]
    fn position_names_round_trip_through_strings() {
        for position in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ] {
            assert_eq!(Position::from(position.as_str()), position);
        }
        assert_eq!(Position::from("middle"), Position::Other("middle".into()));
    }

    #[test]
    fn container_key_combines_base_and_modifier_class() {
        assert_eq!(
            Position::TopRight.container_key(),
            "mw-toast-notification-container top-right"
        );
    }

    #[test]
    fn merge_prefers_later_fields() {
        let base = PartialOptions::new().auto_close(false).position(Position::TopLeft);
        let merged = base.merge(PartialOptions::new().position(Position::BottomRight));

        assert_eq!(merged.auto_close, Some(false));
        assert_eq!(merged.position, Some(Position::BottomRight));
    }
}
