//! Host pages

mod park_finder;

pub use park_finder::{ActiveFiltersPanel, ParkFinder};
