//! Park Finder - filter parks by day-use amenities, activities and camping
//!
//! A single page hosting three multi-select filter buttons. The page owns the
//! selections; the buttons only render them and report changes.

pub mod config;
pub mod options;
pub mod pages;
pub mod state;

use dioxus::prelude::*;
use pages::ParkFinder;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Park Finder" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ParkFinder {}
    }
}
