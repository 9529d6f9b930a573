//! parkfinder-common - Filter model shared by the Park Finder UI
//!
//! Pure data structures and selection logic without any rendering or I/O.

mod catalog;
mod filter;
mod panel;

pub use catalog::{validate_group, CatalogError};
pub use filter::{
    badge_count, filter_options, is_selected, remove_selection, selected_options,
    toggle_selection, FilterOption,
};
pub use panel::{FilterPanel, PanelState};
