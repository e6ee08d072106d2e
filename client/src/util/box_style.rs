//! Translation of [`LayoutProperties`] into an inline flexbox style.
//!
//! DESIGN
//! ======
//! Absent properties produce no declaration at all, so whatever the browser
//! or an enclosing stylesheet says still applies. Only two values are
//! derived rather than passed through: the `flex` shorthand and the border
//! style. `display: flex` is always written.

#[cfg(test)]
#[path = "box_style_test.rs"]
mod box_style_test;

use crate::util::layout::LayoutProperties;

/// Ordered list of CSS declarations with kebab-case property names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: Vec<(&'static str, String)>,
}

impl StyleMap {
    fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.declarations.push((property, value.into()));
    }

    fn push_opt(&mut self, property: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(property, value);
        }
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Render as the value of a `style` attribute.
    #[must_use]
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `"none"` when the border width is literally `"none"`, otherwise `"solid"`
/// as soon as any border property is set. Nothing when none are.
fn border_style(layout: &LayoutProperties) -> Option<&'static str> {
    match layout.border_width.as_deref() {
        Some("none") => Some("none"),
        Some(_) => Some("solid"),
        None if layout.border_color.is_some() || layout.border_radius.is_some() => Some("solid"),
        None => None,
    }
}

/// Build the container style for a flexbox layout.
#[must_use]
pub fn box_style(layout: &LayoutProperties) -> StyleMap {
    let mut style = StyleMap::default();

    style.push_opt("flex-direction", layout.flex_direction.map(|d| d.as_css()));
    style.push_opt("flex-wrap", layout.flex_wrap.map(|w| w.as_css()));
    style.push_opt("flex", layout.flex.and_then(|f| f.shorthand()));
    style.push_opt("align-items", layout.align_items.map(|a| a.as_css()));
    style.push("display", "flex");
    style.push_opt("justify-content", layout.justify_content.map(|j| j.as_css()));
    style.push_opt("width", layout.width.as_deref());
    style.push_opt("height", layout.height.as_deref());
    style.push_opt("padding", layout.padding.as_deref());
    style.push_opt("margin", layout.margin.as_deref());
    style.push_opt("border-radius", layout.border_radius.as_deref());
    style.push_opt("border-width", layout.border_width.as_deref());
    style.push_opt("border-style", border_style(layout));
    style.push_opt("border-color", layout.border_color.as_deref());
    style.push_opt("background-color", layout.background_color.as_deref());

    style
}
