//! Layout property model for flexbox containers.
//!
//! Every field is optional: `None` means "no override", so the browser
//! default applies. Enum values serialize as their CSS keyword, which keeps
//! layouts readable when they travel inside editor messages.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a CSS keyword does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {property} keyword: {value}")]
pub struct ParseLayoutError {
    pub property: &'static str,
    pub value: String,
}

impl ParseLayoutError {
    fn new(property: &'static str, value: &str) -> Self {
        Self { property, value: value.to_owned() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexDirection {
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "column")]
    Column,
}

impl FlexDirection {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl FromStr for FlexDirection {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::Row),
            "column" => Ok(Self::Column),
            other => Err(ParseLayoutError::new("flex-direction", other)),
        }
    }
}

/// Cross-axis alignment of children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignItems {
    #[serde(rename = "flex-start")]
    Start,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "flex-end")]
    End,
    #[serde(rename = "stretch")]
    Stretch,
    #[serde(rename = "baseline")]
    Baseline,
}

impl AlignItems {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
        }
    }
}

impl FromStr for AlignItems {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "flex-end" => Ok(Self::End),
            "stretch" => Ok(Self::Stretch),
            "baseline" => Ok(Self::Baseline),
            other => Err(ParseLayoutError::new("align-items", other)),
        }
    }
}

/// Main-axis distribution of children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JustifyContent {
    #[serde(rename = "flex-start")]
    Start,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "flex-end")]
    End,
    #[serde(rename = "space-between")]
    SpaceBetween,
    #[serde(rename = "space-around")]
    SpaceAround,
}

impl JustifyContent {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

impl FromStr for JustifyContent {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "flex-end" => Ok(Self::End),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            other => Err(ParseLayoutError::new("justify-content", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexWrap {
    #[serde(rename = "nowrap")]
    NoWrap,
    #[serde(rename = "wrap")]
    Wrap,
}

impl FlexWrap {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::NoWrap => "nowrap",
            Self::Wrap => "wrap",
        }
    }
}

impl FromStr for FlexWrap {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nowrap" => Ok(Self::NoWrap),
            "wrap" => Ok(Self::Wrap),
            other => Err(ParseLayoutError::new("flex-wrap", other)),
        }
    }
}

/// How the element itself resizes inside a flex parent.
///
/// `CustomFlex` leaves the `flex` shorthand to the caller, so it has no CSS
/// keyword of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flex {
    ShrinkIfNeeded,
    GrowIfPossible,
    DontShrinkOrGrow,
    CustomFlex,
}

impl Flex {
    /// The `grow shrink basis` shorthand, or `None` for custom sizing.
    #[must_use]
    pub fn shorthand(self) -> Option<&'static str> {
        match self {
            Self::ShrinkIfNeeded => Some("0 1 auto"),
            Self::GrowIfPossible => Some("1 0 auto"),
            Self::DontShrinkOrGrow => Some("0 0 auto"),
            Self::CustomFlex => None,
        }
    }
}

impl FromStr for Flex {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shrink-if-needed" => Ok(Self::ShrinkIfNeeded),
            "grow-if-possible" => Ok(Self::GrowIfPossible),
            "dont-shrink-or-grow" => Ok(Self::DontShrinkOrGrow),
            "custom-flex" => Ok(Self::CustomFlex),
            other => Err(ParseLayoutError::new("flex", other)),
        }
    }
}

/// Layout of one flexbox container as edited in the property panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<Flex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}
