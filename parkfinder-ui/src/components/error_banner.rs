//! Amber warning banner for configuration problems.

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Amber warning banner with icon, heading and detail text.
#[component]
pub fn ErrorBanner(heading: String, detail: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "bg-amber-50 border border-amber-300 rounded-lg p-4",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-600 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-900 mb-1", "{heading}" }
                    p { class: "text-sm text-gray-600 select-text break-words", "{detail}" }
                }
            }
        }
    }
}
