use std::collections::HashSet;

use thiserror::Error;

use crate::filter::FilterOption;

/// Problems with a filter group definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("filter group '{group}' lists option id '{id}' more than once")]
    DuplicateOptionId { group: String, id: String },
    #[error("filter group '{group}' starts with unknown option id '{id}' selected")]
    UnknownDefaultSelection { group: String, id: String },
}

/// Check a group's registry and initial selection before it is handed to a
/// filter button.
pub fn validate_group(
    group: &str,
    options: &[FilterOption],
    initial_selection: &[String],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateOptionId {
                group: group.to_string(),
                id: option.id.clone(),
            });
        }
    }

    if let Some(id) = initial_selection
        .iter()
        .find(|id| !seen.contains(id.as_str()))
    {
        return Err(CatalogError::UnknownDefaultSelection {
            group: group.to_string(),
            id: id.clone(),
        });
    }

    Ok(())
}
