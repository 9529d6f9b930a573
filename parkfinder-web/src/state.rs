//! Page-level selection store

use dioxus::prelude::*;
use serde::Serialize;

use crate::config::{FilterGroupConfig, FilterGroupKey};

/// The three selection sets owned by the park finder page.
///
/// Each list keeps the order in which options were toggled on. Serializes
/// with the camelCase keys shown in the Active Filters panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelections {
    pub day_use: Vec<String>,
    pub activities: Vec<String>,
    pub camping: Vec<String>,
}

impl FilterSelections {
    /// Selections at page mount.
    pub fn from_groups(groups: &[FilterGroupConfig]) -> Self {
        let mut selections = Self::default();
        for group in groups {
            selections.set(group.key, group.initial_ids());
        }
        selections
    }

    #[cfg(test)]
    pub fn get(&self, key: FilterGroupKey) -> &[String] {
        match key {
            FilterGroupKey::DayUse => &self.day_use,
            FilterGroupKey::Activities => &self.activities,
            FilterGroupKey::Camping => &self.camping,
        }
    }

    pub fn set(&mut self, key: FilterGroupKey, ids: Vec<String>) {
        match key {
            FilterGroupKey::DayUse => self.day_use = ids,
            FilterGroupKey::Activities => self.activities = ids,
            FilterGroupKey::Camping => self.camping = ids,
        }
    }

    /// Two-space indented JSON for the debug panel.
    pub fn to_debug_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Current selection of one group, read through the store lens so only that
/// group's readers subscribe.
pub fn read_group(selections: Store<FilterSelections>, key: FilterGroupKey) -> Vec<String> {
    match key {
        FilterGroupKey::DayUse => selections.day_use().read().clone(),
        FilterGroupKey::Activities => selections.activities().read().clone(),
        FilterGroupKey::Camping => selections.camping().read().clone(),
    }
}

pub fn write_group(selections: Store<FilterSelections>, key: FilterGroupKey, ids: Vec<String>) {
    match key {
        FilterGroupKey::DayUse => selections.day_use().set(ids),
        FilterGroupKey::Activities => selections.activities().set(ids),
        FilterGroupKey::Camping => selections.camping().set(ids),
    }
}

/// Owned copy of every group, for serialization.
pub fn snapshot(selections: Store<FilterSelections>) -> FilterSelections {
    FilterSelections {
        day_use: read_group(selections, FilterGroupKey::DayUse),
        activities: read_group(selections, FilterGroupKey::Activities),
        camping: read_group(selections, FilterGroupKey::Camping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FILTER_GROUPS;
    use parkfinder_common::{remove_selection, toggle_selection};
    use serde_json::json;

    #[test]
    fn test_initial_selections() {
        let selections = FilterSelections::from_groups(&FILTER_GROUPS);
        assert_eq!(selections.get(FilterGroupKey::DayUse), ["shelter", "picnic"]);
        assert!(selections.get(FilterGroupKey::Activities).is_empty());
        assert!(selections.get(FilterGroupKey::Camping).is_empty());
    }

    #[test]
    fn test_initial_debug_json() {
        let selections = FilterSelections::from_groups(&FILTER_GROUPS);
        assert_eq!(
            serde_json::to_string(&selections).unwrap(),
            r#"{"dayUse":["shelter","picnic"],"activities":[],"camping":[]}"#
        );
    }

    #[test]
    fn test_debug_json_is_pretty_printed() {
        let selections = FilterSelections::from_groups(&FILTER_GROUPS);
        let text = selections.to_debug_json().unwrap();
        assert!(text.starts_with("{\n  \"dayUse\": [\n    \"shelter\","));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!({"dayUse": ["shelter", "picnic"], "activities": [], "camping": []})
        );
    }

    #[test]
    fn test_toggle_playground_appends_to_day_use() {
        let mut selections = FilterSelections::from_groups(&FILTER_GROUPS);
        let next = toggle_selection(selections.get(FilterGroupKey::DayUse), "playground");
        assert_eq!(next, ["shelter", "picnic", "playground"]);
        selections.set(FilterGroupKey::DayUse, next);

        let parsed: serde_json::Value =
            serde_json::from_str(&selections.to_debug_json().unwrap()).unwrap();
        assert_eq!(parsed["dayUse"], json!(["shelter", "picnic", "playground"]));
    }

    #[test]
    fn test_groups_do_not_interact() {
        let mut selections = FilterSelections::from_groups(&FILTER_GROUPS);
        let next = toggle_selection(selections.get(FilterGroupKey::Camping), "yurt");
        selections.set(FilterGroupKey::Camping, next);
        let next = remove_selection(selections.get(FilterGroupKey::DayUse), "shelter");
        selections.set(FilterGroupKey::DayUse, next);

        assert_eq!(selections.get(FilterGroupKey::DayUse), ["picnic"]);
        assert!(selections.get(FilterGroupKey::Activities).is_empty());
        assert_eq!(selections.get(FilterGroupKey::Camping), ["yurt"]);
    }
}
