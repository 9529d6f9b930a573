//! Checkbox component

use dioxus::prelude::*;

/// A labelled checkbox row. The whole row is clickable.
#[component]
pub fn Checkbox(
    checked: bool,
    onchange: EventHandler<bool>,
    label: String,
    #[props(default)] class: Option<String>,
) -> Element {
    rsx! {
        label { class: class.as_deref(),
            input {
                r#type: "checkbox",
                class: "h-4 w-4 shrink-0 rounded border-gray-300 accent-emerald-700",
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            span { "{label}" }
        }
    }
}
