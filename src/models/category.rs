//! Allowed transaction categories
//!
//! The set of categories a user can pick from is configured in
//! `Settings::categories`; these are the labels a fresh install starts with.

/// Categories offered on a fresh install
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Housing",
    "Utilities",
    "Medical",
    "Education",
    "Salary",
    "Bonus",
    "Investment",
    "Other",
];

/// The default categories as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Find a category by name (case-insensitive), returning its configured spelling
pub fn find_category<'a>(categories: &'a [String], name: &str) -> Option<&'a str> {
    let wanted = name.trim().to_lowercase();
    categories
        .iter()
        .find(|c| c.to_lowercase() == wanted)
        .map(String::as_str)
}
