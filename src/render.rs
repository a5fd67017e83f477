// SPDX-License-Identifier: MPL-2.0
//! Toast markup rendering.
//!
//! The lifecycle treats rendering as a pure function from resolved options to
//! markup, behind the [`Render`] trait. [`MarkupRenderer`] is the built-in
//! implementation; hosts with their own templating plug in through the same
//! trait.

use crate::config::defaults::{CLOSE_CLASS, TOAST_CLASS};
use crate::toast::ToastOptions;

/// Renders resolved toast options into markup.
///
/// The markup must have a single root element, and when `show_close` is set
/// it must contain exactly one element carrying the close class.
pub trait Render: Send + Sync {
    fn render(&self, options: &ToastOptions) -> String;
}

impl<F> Render for F
where
    F: Fn(&ToastOptions) -> String + Send + Sync,
{
    fn render(&self, options: &ToastOptions) -> String {
        self(options)
    }
}

/// Default renderer producing the standard toast structure:
/// icon, message and an optional close button inside a typed root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupRenderer;

impl Render for MarkupRenderer {
    fn render(&self, options: &ToastOptions) -> String {
        let mut classes = format!(
            "{TOAST_CLASS} {TOAST_CLASS}--{}",
            escape(options.toast_type().as_str())
        );
        if options.colourful() {
            classes.push_str(&format!(" {TOAST_CLASS}--colourful"));
        }

        let close = if options.show_close() {
            format!(r#"<button class="{CLOSE_CLASS}" aria-label="Close">&times;</button>"#)
        } else {
            String::new()
        };

        format!(
            r#"<div class="{classes}" role="status"><span class="{TOAST_CLASS}__icon">{icon}</span><span class="{TOAST_CLASS}__message">{message}</span>{close}</div>"#,
            icon = options.icon(),
            message = escape(options.message()),
        )
    }
}

/// Escapes text for use inside element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::toast::{resolve_with, PartialOptions, ToastType};

    fn options(partial: PartialOptions, message: &str) -> ToastOptions {
        resolve_with(&ToastConfig::default(), Some(message), partial)
    }

    #[test]
    fn renders_type_class_and_message() {
        let markup = MarkupRenderer.render(&options(
            PartialOptions::new().toast_type(ToastType::Success),
            "Saved!",
        ));

        assert!(markup.starts_with(
            r#"<div class="mw-toast-notification mw-toast-notification--success""#
        ));
        assert!(markup.contains(">Saved!</span>"));
    }

    #[test]
    fn close_button_follows_show_close() {
        let with_close = MarkupRenderer.render(&options(PartialOptions::new(), "a"));
        let without_close =
            MarkupRenderer.render(&options(PartialOptions::new().show_close(false), "a"));

        assert_eq!(with_close.matches(CLOSE_CLASS).count(), 1);
        assert!(!without_close.contains(CLOSE_CLASS));
    }

    #[test]
    fn colourful_adds_modifier_class() {
        let markup = MarkupRenderer.render(&options(PartialOptions::new().colourful(true), "a"));
        assert!(markup.contains("mw-toast-notification--colourful"));
    }

    #[test]
    fn message_is_escaped_but_icon_is_not() {
        let markup = MarkupRenderer.render(&options(
            PartialOptions::new().icon("<b>i</b>"),
            "<script>alert('x')</script>",
        ));

        assert!(markup.contains("<b>i</b>"));
        assert!(markup.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn closures_are_renderers() {
        let render = |options: &ToastOptions| format!("<p>{}</p>", options.message());
        assert_eq!(render.render(&options(PartialOptions::new(), "hey")), "<p>hey</p>");
    }
}
