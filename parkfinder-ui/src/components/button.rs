//! Unstyled button primitive

use dioxus::prelude::*;

/// Chromeless button - provides accessibility wiring without visual styling.
///
/// Always renders `type="button"`.
#[component]
pub fn ChromelessButton(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    /// Rendered as `aria-expanded` for buttons that control a popover
    #[props(default)]
    expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            id: id.as_deref(),
            class: class.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_haspopup: if expanded.is_some() { Some("dialog") } else { None },
            aria_expanded: expanded.map(|open| if open { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
