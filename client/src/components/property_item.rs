//! Labeled row wrapping one property control.
//!
//! The row is a `<label>`, so everything inside it stays phrasing content.

#[cfg(test)]
#[path = "property_item_test.rs"]
mod property_item_test;

use leptos::prelude::*;

#[component]
pub fn PropertyItem(
    #[prop(into)] label: String,
    #[prop(optional_no_strip)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="property-item">
            <span class="property-item__label">{label}</span>
            <span class="property-item__control">{children()}</span>
            {description.map(|text| view! { <span class="property-item__description">{text}</span> })}
        </label>
    }
}
