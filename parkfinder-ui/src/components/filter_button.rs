//! Multi-select filter button
//!
//! A pill-shaped trigger that opens a popover with a search box, a row of
//! removable chips for the current selection and a checkbox list.
//!
//! The selection is controlled: `selected_ids` comes from the parent on every
//! render and changes are only reported through `on_change`. The button keeps
//! nothing but its own open state and search text.
//!
//! ```ignore
//! FilterButton {
//!     label: "Day Use",
//!     options: day_use_options(),
//!     selected_ids: selected(),
//!     on_change: move |next: Vec<String>| selected.set(next),
//!     search_placeholder: "Search day use options",
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use parkfinder_common::{
    badge_count, filter_options, is_selected, remove_selection, selected_options,
    toggle_selection, FilterOption, FilterPanel,
};

use crate::components::icons::{ChevronDownIcon, SearchIcon, XIcon};
use crate::components::{Checkbox, ChromelessButton, Dropdown, Placement};

/// Counter for generating unique trigger anchor IDs
static TRIGGER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Search box placeholder when the caller does not provide one
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";

/// A change the user made to the selection from inside the panel
#[derive(Clone, Debug, PartialEq, Eq)]
enum SelectionEdit {
    /// Checkbox row activated
    Toggle(String),
    /// Chip remove button activated
    Remove(String),
}

/// Apply `edit` to the parent's selection and hand the result to `emit`.
fn apply_edit(selected_ids: &[String], edit: SelectionEdit, emit: impl FnOnce(Vec<String>)) {
    let next = match &edit {
        SelectionEdit::Toggle(id) => toggle_selection(selected_ids, id),
        SelectionEdit::Remove(id) => remove_selection(selected_ids, id),
    };
    tracing::debug!("{edit:?}, selection now {next:?}");
    emit(next);
}

/// Searchable multi-select filter with chip display
#[component]
pub fn FilterButton(
    /// Group name shown on the trigger and used in ARIA labels
    label: String,
    /// Candidate options
    options: Vec<FilterOption>,
    /// Currently selected option ids, owned by the parent
    #[props(default)]
    selected_ids: Vec<String>,
    /// Receives the complete new selection after each toggle or removal
    #[props(default)]
    on_change: Option<EventHandler<Vec<String>>>,
    #[props(default = DEFAULT_SEARCH_PLACEHOLDER.to_string())] search_placeholder: String,
) -> Element {
    let mut panel = use_signal(FilterPanel::new);

    let anchor_id = use_hook(|| {
        let id = TRIGGER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("filter-trigger-{}", id)
    });

    let panel_state = panel.read().clone();
    let is_open = panel_state.is_open();

    let emit = move |next: Vec<String>| {
        if let Some(handler) = on_change {
            handler.call(next);
        }
    };

    let toggle_base = selected_ids.clone();
    let remove_base = selected_ids.clone();
    let log_label = label.clone();

    rsx! {
        div { class: "relative inline-block",
            FilterTriggerView {
                anchor_id: anchor_id.clone(),
                label: label.clone(),
                count: badge_count(&selected_ids),
                is_open,
                on_click: move |_| {
                    panel.write().toggle_open();
                    tracing::debug!("{} filter is now {:?}", log_label, panel.read().state());
                },
            }

            Dropdown {
                anchor_id: anchor_id.clone(),
                is_open,
                on_close: move |_| panel.write().set_open(false),
                placement: Placement::BottomStart,
                offset: 8.0,
                class: "w-72 rounded-lg border border-gray-200 bg-white p-0 shadow-lg",
                FilterPanelView {
                    label: label.clone(),
                    options: options.clone(),
                    selected_ids: selected_ids.clone(),
                    panel: panel_state,
                    search_placeholder,
                    on_search_change: move |value: String| panel.write().set_search(value),
                    on_clear_search: move |_| panel.write().clear_search(),
                    on_toggle: move |id: String| {
                        apply_edit(&toggle_base, SelectionEdit::Toggle(id), emit)
                    },
                    on_remove: move |id: String| {
                        apply_edit(&remove_base, SelectionEdit::Remove(id), emit)
                    },
                }
            }
        }
    }
}

/// Trigger pill: label, count badge and chevron
#[component]
pub fn FilterTriggerView(
    anchor_id: String,
    label: String,
    /// Badge number, hidden when `None`
    count: Option<usize>,
    is_open: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let base = "inline-flex items-center gap-2 rounded-full border px-4 py-2 text-sm font-medium transition-colors bg-white text-gray-900 shadow-sm hover:bg-gray-50";
    let open_class = if is_open {
        "ring-2 ring-emerald-700/30 border-emerald-700"
    } else {
        "border-gray-300"
    };
    let chevron_class = if is_open {
        "h-4 w-4 text-gray-500 transition-transform rotate-180"
    } else {
        "h-4 w-4 text-gray-500 transition-transform"
    };

    rsx! {
        ChromelessButton {
            id: anchor_id,
            class: format!("{base} {open_class}"),
            aria_label: format!("Filter map by {}", label.to_lowercase()),
            expanded: is_open,
            onclick: on_click,
            "{label}"
            if let Some(count) = count {
                span { class: "ml-1 inline-flex h-5 min-w-5 items-center justify-center rounded-full bg-emerald-700 px-1.5 text-xs text-white",
                    "{count}"
                }
            }
            ChevronDownIcon { class: chevron_class }
        }
    }
}

/// Popover body: search box, selected chips and the option list
#[component]
pub fn FilterPanelView(
    label: String,
    options: Vec<FilterOption>,
    selected_ids: Vec<String>,
    /// Open flag and search text of the owning button
    panel: FilterPanel,
    search_placeholder: String,
    on_search_change: EventHandler<String>,
    on_clear_search: EventHandler<()>,
    on_toggle: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let group = label.to_lowercase();
    let chips = selected_options(&options, &selected_ids);
    let search = panel.search().to_string();
    let visible = filter_options(&options, &search);

    rsx! {
        div { class: "flex items-center gap-2 border-b border-gray-200 px-3 py-2",
            SearchIcon { class: "h-4 w-4 shrink-0 text-gray-500" }
            input {
                r#type: "text",
                class: "flex-1 bg-transparent text-sm outline-none placeholder:text-gray-500",
                placeholder: "{search_placeholder}",
                aria_label: "Search {group} options",
                value: "{search}",
                oninput: move |e| on_search_change.call(e.value()),
            }
            if panel.can_clear() {
                ChromelessButton {
                    class: "rounded-sm p-0.5 text-gray-500 hover:text-gray-900",
                    aria_label: "Clear search",
                    onclick: move |_| on_clear_search.call(()),
                    XIcon { class: "h-3.5 w-3.5" }
                }
            }
        }

        if !chips.is_empty() {
            div { class: "flex flex-wrap gap-1.5 border-b border-gray-200 px-3 py-2",
                for chip in chips {
                    span {
                        key: "{chip.id}",
                        class: "inline-flex items-center gap-1 rounded-full bg-emerald-700/10 px-2.5 py-1 text-xs font-medium text-emerald-800",
                        "{chip.label}"
                        ChromelessButton {
                            class: "rounded-full p-0.5 hover:bg-emerald-700/20",
                            aria_label: format!("Remove selected option {}", chip.label),
                            onclick: {
                                let id = chip.id.clone();
                                move |_| on_remove.call(id.clone())
                            },
                            XIcon { class: "h-3 w-3" }
                        }
                    }
                }
            }
        }

        ul { class: "max-h-56 overflow-y-auto py-1", role: "listbox",
            if visible.is_empty() {
                li { class: "px-3 py-2 text-sm text-gray-500", "No options found" }
            }
            for option in visible {
                FilterOptionRow {
                    key: "{option.id}",
                    checked: is_selected(&selected_ids, &option.id),
                    option: option.clone(),
                    on_toggle,
                }
            }
        }
    }
}

#[component]
fn FilterOptionRow(option: FilterOption, checked: bool, on_toggle: EventHandler<String>) -> Element {
    let row_class = if checked {
        "flex cursor-pointer items-center gap-3 px-3 py-2 text-sm transition-colors hover:bg-gray-100 bg-gray-100/50"
    } else {
        "flex cursor-pointer items-center gap-3 px-3 py-2 text-sm transition-colors hover:bg-gray-100"
    };
    let id = option.id.clone();

    rsx! {
        li { role: "option", aria_selected: if checked { "true" } else { "false" },
            Checkbox {
                checked,
                label: option.label,
                class: row_class.to_string(),
                onchange: move |_| on_toggle.call(id.clone()),
            }
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

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn edited(selected: &[&str], edit: SelectionEdit) -> Option<Vec<String>> {
        let mut reported = None;
        apply_edit(&ids(selected), edit, |next| reported = Some(next));
        reported
    }

    fn fruit() -> Vec<FilterOption> {
        vec![
            FilterOption::new("a", "Apple"),
            FilterOption::new("b", "Banana"),
        ]
    }

    fn panel_with(selected: &[&str], search: &str) -> Element {
        let mut panel = FilterPanel::new();
        panel.set_open(true);
        panel.set_search(search);
        rsx! {
            FilterPanelView {
                label: "Fruit",
                options: fruit(),
                selected_ids: selected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                panel,
                search_placeholder: "Search",
                on_search_change: |_| {},
                on_clear_search: |_| {},
                on_toggle: |_| {},
                on_remove: |_| {},
            }
        }
    }

    #[test]
    fn test_trigger_shows_badge_and_label() {
        let html = render(|| {
            rsx! {
                FilterButton {
                    label: "Day Use",
                    options: fruit(),
                    selected_ids: vec!["a".to_string(), "b".to_string()],
                }
            }
        });
        assert!(html.contains(r#"aria-label="Filter map by day use""#));
        assert!(html.contains(">2</span>"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_trigger_hides_badge_when_nothing_selected() {
        let html = render(|| {
            rsx! {
                FilterTriggerView {
                    anchor_id: "t",
                    label: "Activities",
                    count: None,
                    is_open: false,
                    on_click: |_| {},
                }
            }
        });
        assert!(!html.contains("rounded-full bg-emerald-700 px-1.5"));
        assert!(html.contains("Activities"));
    }

    #[test]
    fn test_open_trigger_rotates_chevron() {
        let html = render(|| {
            rsx! {
                FilterTriggerView {
                    anchor_id: "t",
                    label: "Activities",
                    count: Some(1),
                    is_open: true,
                    on_click: |_| {},
                }
            }
        });
        assert!(html.contains("rotate-180"));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn test_default_search_placeholder() {
        let html = render(|| {
            rsx! {
                FilterButton { label: "Activities", options: fruit() }
            }
        });
        assert!(html.contains(r#"placeholder="Search""#));
        assert!(html.contains(r#"aria-label="Search activities options""#));
    }

    #[test]
    fn test_search_narrows_list_but_not_chips() {
        let html = render(|| panel_with(&["a"], "ban"));
        // Apple only survives as a chip
        assert!(html.contains(r#"aria-label="Remove selected option Apple""#));
        assert!(html.contains("Banana"));
        assert_eq!(html.matches(r#"role="option""#).count(), 1);
        assert!(html.contains(r#"aria-label="Clear search""#));
    }

    #[test]
    fn test_empty_search_lists_everything_without_clear_button() {
        let html = render(|| panel_with(&[], ""));
        assert_eq!(html.matches(r#"role="option""#).count(), 2);
        assert!(!html.contains("Clear search"));
        assert!(!html.contains("Remove selected option"));
    }

    #[test]
    fn test_no_options_found() {
        let html = render(|| panel_with(&["a"], "cherry"));
        assert!(html.contains("No options found"));
        assert_eq!(html.matches(r#"role="option""#).count(), 0);
    }

    #[test]
    fn test_checked_rows_are_marked_selected() {
        let html = render(|| panel_with(&["b"], ""));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-selected="false""#).count(), 1);
    }

    #[test]
    fn test_chips_follow_option_order_and_skip_unknown_ids() {
        let html = render(|| panel_with(&["ghost", "b", "a"], ""));
        let apple = html.find("Remove selected option Apple");
        let banana = html.find("Remove selected option Banana");
        assert!(apple.is_some() && banana.is_some());
        assert!(apple < banana);
        assert!(!html.contains("ghost"));
    }

    #[test]
    fn test_toggle_reports_appended_selection() {
        let reported = edited(&["shelter", "picnic"], SelectionEdit::Toggle("playground".into()));
        assert_eq!(reported, Some(ids(&["shelter", "picnic", "playground"])));
    }

    #[test]
    fn test_toggle_of_selected_option_reports_it_removed() {
        let reported = edited(&["shelter", "picnic"], SelectionEdit::Toggle("shelter".into()));
        assert_eq!(reported, Some(ids(&["picnic"])));
    }

    #[test]
    fn test_chip_removal_never_adds() {
        let reported = edited(&["shelter", "picnic"], SelectionEdit::Remove("picnic".into()));
        assert_eq!(reported, Some(ids(&["shelter"])));

        // Removing an id that is not selected reports the selection unchanged
        let reported = edited(&["shelter"], SelectionEdit::Remove("playground".into()));
        assert_eq!(reported, Some(ids(&["shelter"])));
    }
}
