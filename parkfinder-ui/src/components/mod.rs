//! Shared UI components

pub mod button;
pub mod checkbox;
pub mod dropdown;
pub mod error_banner;
pub mod filter_button;
pub mod icons;

pub use button::ChromelessButton;
pub use checkbox::Checkbox;
pub use dropdown::{Dropdown, Placement};
pub use error_banner::ErrorBanner;
pub use filter_button::{
    FilterButton, FilterPanelView, FilterTriggerView, DEFAULT_SEARCH_PLACEHOLDER,
};
pub use icons::{AlertTriangleIcon, ChevronDownIcon, SearchIcon, XIcon};
