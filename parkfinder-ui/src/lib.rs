//! parkfinder-ui - Filter widgets for the Park Finder page
//!
//! Pure view components plus the stateful `FilterButton`. Components never
//! own selection state; they render what they are given and report intents
//! through event handlers.

pub mod components;

pub use components::*;
pub use parkfinder_common::FilterOption;
