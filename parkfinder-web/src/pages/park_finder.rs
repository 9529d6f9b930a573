//! Park finder page: three filter buttons over independent selections and a
//! JSON dump of what is currently selected.

use dioxus::prelude::*;
use parkfinder_ui::{ErrorBanner, FilterButton, DEFAULT_SEARCH_PLACEHOLDER};
use tracing::{error, info};

use crate::config::{validate_filter_groups, FILTER_GROUPS};
use crate::state::{read_group, snapshot, write_group, FilterSelections};

#[component]
pub fn ParkFinder() -> Element {
    let validation = use_hook(|| {
        let result = validate_filter_groups(&FILTER_GROUPS);
        if let Err(e) = &result {
            error!("Invalid filter configuration: {}", e);
        }
        result
    });
    let selections = use_store(|| FilterSelections::from_groups(&FILTER_GROUPS));

    rsx! {
        div { class: "min-h-screen bg-stone-50 p-8",
            div { class: "mx-auto max-w-3xl",
                h1 { class: "mb-2 text-2xl font-bold text-gray-900", "Park Finder" }
                p { class: "mb-6 text-sm text-gray-500",
                    "Filter parks by activities, camping, and day use options."
                }

                {match validation {
                    Ok(()) => rsx! {
                        div { class: "flex flex-wrap gap-3",
                            for group in FILTER_GROUPS.iter() {
                                FilterButton {
                                    key: "{group.label}",
                                    label: group.label.to_string(),
                                    options: (group.options)(),
                                    selected_ids: read_group(selections, group.key),
                                    on_change: move |next: Vec<String>| {
                                        info!("{} filters changed: {:?}", group.label, next);
                                        write_group(selections, group.key, next);
                                    },
                                    search_placeholder: group
                                        .search_placeholder
                                        .unwrap_or(DEFAULT_SEARCH_PLACEHOLDER)
                                        .to_string(),
                                }
                            }
                        }
                        ActiveFiltersPanel { selections: snapshot(selections) }
                    },
                    Err(e) => rsx! {
                        ErrorBanner {
                            heading: "Filters are unavailable",
                            detail: e.to_string(),
                        }
                    },
                }}
            }
        }
    }
}

/// Debug view of the current selections
#[component]
pub fn ActiveFiltersPanel(selections: FilterSelections) -> Element {
    let text = match selections.to_debug_json() {
        Ok(json) => json,
        Err(e) => format!("Could not serialize selections: {e}"),
    };

    rsx! {
        div { class: "mt-8 rounded-lg border border-gray-200 bg-white p-4",
            h2 { class: "mb-2 text-sm font-semibold text-gray-900", "Active Filters" }
            pre { class: "text-xs text-gray-500", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_page_renders_three_filters() {
        let html = render(ParkFinder);
        assert!(html.contains("Park Finder"));
        assert!(html.contains(r#"aria-label="Filter map by day use""#));
        assert!(html.contains(r#"aria-label="Filter map by activities""#));
        assert!(html.contains(r#"placeholder="Search day use options""#));
        assert_eq!(html.matches(r#"placeholder="Search""#).count(), 2);
    }

    #[test]
    fn test_day_use_badge_starts_at_two() {
        let html = render(ParkFinder);
        // Only Day Use has a selection, so exactly one badge is rendered
        assert_eq!(html.matches(">2</span>").count(), 1);
        assert!(html.contains(r#"aria-label="Remove selected option Shelter""#));
        assert!(html.contains(r#"aria-label="Remove selected option Picnic area""#));
    }

    #[test]
    fn test_active_filters_panel_lists_selection() {
        let html = render(ParkFinder);
        assert!(html.contains("Active Filters"));
        assert!(html.contains(
            "&#34;dayUse&#34;: [\n    &#34;shelter&#34;,\n    &#34;picnic&#34;\n  ]"
        ));
        assert!(html.contains("&#34;activities&#34;: []"));
        assert!(html.contains("&#34;camping&#34;: []"));
    }

    #[test]
    fn test_active_filters_panel_follows_its_selections() {
        let html = render(|| {
            rsx! {
                ActiveFiltersPanel {
                    selections: FilterSelections {
                        day_use: vec!["picnic".to_string()],
                        activities: vec!["hiking".to_string(), "fishing".to_string()],
                        camping: Vec::new(),
                    },
                }
            }
        });
        assert!(html.contains("&#34;dayUse&#34;: [\n    &#34;picnic&#34;\n  ]"));
        assert!(html.contains(
            "&#34;activities&#34;: [\n    &#34;hiking&#34;,\n    &#34;fishing&#34;\n  ]"
        ));
        assert!(!html.contains("shelter"));
    }
}
