use serde::{Deserialize, Serialize};

/// A single selectable entry within a filter group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    /// Unique key within the group
    pub id: String,
    /// User-facing text, also what search matches against
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Options whose label contains `search`, ignoring case.
///
/// An empty search returns every option. Order follows `options`.
pub fn filter_options(options: &[FilterOption], search: &str) -> Vec<FilterOption> {
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether `id` is part of the selection.
pub fn is_selected(selected_ids: &[String], id: &str) -> bool {
    selected_ids.iter().any(|s| s == id)
}

/// Selection after toggling `id`.
///
/// A selected id is removed; an unselected id is appended at the end.
pub fn toggle_selection(selected_ids: &[String], id: &str) -> Vec<String> {
    if is_selected(selected_ids, id) {
        remove_selection(selected_ids, id)
    } else {
        let mut next = selected_ids.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Selection with every occurrence of `id` removed. Other ids keep their order.
pub fn remove_selection(selected_ids: &[String], id: &str) -> Vec<String> {
    selected_ids.iter().filter(|s| *s != id).cloned().collect()
}

/// Options that are currently selected, in option-list order.
///
/// Ids with no matching option are dropped.
pub fn selected_options(options: &[FilterOption], selected_ids: &[String]) -> Vec<FilterOption> {
    options
        .iter()
        .filter(|opt| is_selected(selected_ids, &opt.id))
        .cloned()
        .collect()
}

/// Number shown on the trigger badge, `None` when nothing is selected.
pub fn badge_count(selected_ids: &[String]) -> Option<usize> {
    match selected_ids.len() {
        0 => None,
        n => Some(n),
    }
}
