//! Single-line input used by every property editor row.

use leptos::ev::{Event, FocusEvent};
use leptos::prelude::*;

/// HTML input type of a [`PropertyInput`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyInputType {
    #[default]
    Text,
    Number,
}

impl PropertyInputType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

/// Text or number input. Events are handed to the callbacks untouched.
#[component]
pub fn PropertyInput(
    #[prop(optional)] input_type: PropertyInputType,
    #[prop(into)] value: Signal<String>,
    #[prop(optional_no_strip)] placeholder: Option<String>,
    #[prop(optional_no_strip)] on_change: Option<Callback<Event>>,
    #[prop(optional_no_strip)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    view! {
        <input
            class="property-input"
            type=input_type.as_str()
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(cb) = on_change {
                    cb.run(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(cb) = on_blur {
                    cb.run(ev);
                }
            }
        />
    }
}
