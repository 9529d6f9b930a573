//! Option registries for the three filter groups

use parkfinder_common::FilterOption;

const DAY_USE: &[(&str, &str)] = &[
    ("shelter", "Shelter"),
    ("picnic", "Picnic area"),
    ("playground", "Playground"),
    ("washroom", "Washroom"),
    ("boat-launch", "Boat launch"),
    ("beach", "Beach"),
    ("fishing", "Fishing"),
];

const ACTIVITIES: &[(&str, &str)] = &[
    ("hiking", "Hiking"),
    ("biking", "Biking"),
    ("swimming", "Swimming"),
    ("kayaking", "Kayaking"),
    ("rock-climbing", "Rock climbing"),
    ("birdwatching", "Birdwatching"),
];

const CAMPING: &[(&str, &str)] = &[
    ("tent", "Tent camping"),
    ("rv", "RV camping"),
    ("cabin", "Cabin"),
    ("yurt", "Yurt"),
    ("backcountry", "Backcountry"),
];

fn to_options(entries: &[(&str, &str)]) -> Vec<FilterOption> {
    entries
        .iter()
        .map(|(id, label)| FilterOption::new(*id, *label))
        .collect()
}

pub fn day_use_options() -> Vec<FilterOption> {
    to_options(DAY_USE)
}

pub fn activities_options() -> Vec<FilterOption> {
    to_options(ACTIVITIES)
}

pub fn camping_options() -> Vec<FilterOption> {
    to_options(CAMPING)
}
