//! Numeric property editor row.
//!
//! The bound value is optional: an unset or NaN number renders as an empty
//! field rather than the literal `NaN`.

use leptos::ev::{Event, FocusEvent};
use leptos::prelude::*;

use crate::components::property_input::{PropertyInput, PropertyInputType};
use crate::components::property_item::PropertyItem;
use crate::util::number_input::number_display_value;

#[component]
pub fn PropertyItemNumber(
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] value: MaybeProp<f64>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] on_change: Option<Callback<Event>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let display = Signal::derive(move || number_display_value(value.get()));

    view! {
        <PropertyItem label=label description=description>
            <PropertyInput
                input_type=PropertyInputType::Number
                value=display
                placeholder=placeholder
                on_change=on_change
                on_blur=on_blur
            />
        </PropertyItem>
    }
}
