//! Flexible layout container.
//!
//! ARCHITECTURE
//! ============
//! The component only collects its props into a [`LayoutProperties`] value;
//! all style derivation lives in `util::box_style` so it can be tested
//! without a DOM.

use leptos::prelude::*;

use crate::util::box_style::box_style;
use crate::util::layout::{AlignItems, Flex, FlexDirection, FlexWrap, JustifyContent, LayoutProperties};

/// `<div>` laid out as a flexbox container. Unset props write no style.
#[allow(clippy::too_many_arguments)]
#[component]
pub fn FlexBox(
    #[prop(optional)] flex_direction: Option<FlexDirection>,
    #[prop(optional)] align_items: Option<AlignItems>,
    #[prop(optional)] justify_content: Option<JustifyContent>,
    #[prop(optional)] flex_wrap: Option<FlexWrap>,
    #[prop(optional)] flex: Option<Flex>,
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] height: Option<String>,
    #[prop(optional, into)] padding: Option<String>,
    #[prop(optional, into)] margin: Option<String>,
    #[prop(optional, into)] border_radius: Option<String>,
    #[prop(optional, into)] border_width: Option<String>,
    #[prop(optional, into)] border_color: Option<String>,
    #[prop(optional, into)] background_color: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let layout = LayoutProperties {
        flex_direction,
        align_items,
        justify_content,
        flex_wrap,
        flex,
        width,
        height,
        padding,
        margin,
        border_radius,
        border_width,
        border_color,
        background_color,
    };

    render_box(Signal::stored(layout), children)
}

/// Same container driven by a prebuilt layout, e.g. one decoded from a
/// `layout-changed` message.
#[component]
pub fn FlexBoxLayout(
    #[prop(into)] layout: Signal<LayoutProperties>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    render_box(layout, children)
}

fn render_box(layout: Signal<LayoutProperties>, children: Option<Children>) -> impl IntoView {
    let style = move || box_style(&layout.get()).to_inline();

    view! { <div style=style>{children.map(|c| c())}</div> }
}
