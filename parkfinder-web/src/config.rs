//! Filter group configuration for the park finder page
//!
//! Each group pairs a registry with its trigger label, search placeholder and
//! the selection the page starts with. Groups are independent: selecting in
//! one never touches another.

use parkfinder_common::{validate_group, CatalogError, FilterOption};

use crate::options::{activities_options, camping_options, day_use_options};

/// Identifies which selection set a group writes to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterGroupKey {
    DayUse,
    Activities,
    Camping,
}

#[derive(Debug)]
pub struct FilterGroupConfig {
    pub key: FilterGroupKey,
    /// Trigger text, also used in ARIA labels
    pub label: &'static str,
    /// Falls back to the filter button's default when `None`
    pub search_placeholder: Option<&'static str>,
    pub options: fn() -> Vec<FilterOption>,
    pub initial_selection: &'static [&'static str],
}

impl FilterGroupConfig {
    pub fn initial_ids(&self) -> Vec<String> {
        self.initial_selection
            .iter()
            .map(|id| id.to_string())
            .collect()
    }
}

pub static FILTER_GROUPS: [FilterGroupConfig; 3] = [
    FilterGroupConfig {
        key: FilterGroupKey::DayUse,
        label: "Day Use",
        search_placeholder: Some("Search day use options"),
        options: day_use_options,
        initial_selection: &["shelter", "picnic"],
    },
    FilterGroupConfig {
        key: FilterGroupKey::Activities,
        label: "Activities",
        search_placeholder: None,
        options: activities_options,
        initial_selection: &[],
    },
    FilterGroupConfig {
        key: FilterGroupKey::Camping,
        label: "Camping & Lodging",
        search_placeholder: None,
        options: camping_options,
        initial_selection: &[],
    },
];

/// Check every group's registry and initial selection.
pub fn validate_filter_groups(groups: &[FilterGroupConfig]) -> Result<(), CatalogError> {
    for group in groups {
        validate_group(group.label, &(group.options)(), &group.initial_ids())?;
    }
    Ok(())
}
