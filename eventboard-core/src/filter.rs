//! Category and search criteria applied to the event list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_ALL;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` (any case) and the empty string mean no filter.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(CATEGORY_ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::parse(&s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", CATEGORY_ALL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Case-insensitive substring matched against title, description and location
    pub search_key: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search_key: impl Into<String>) -> Self {
        FilterState {
            category,
            search_key: search_key.into(),
        }
    }
}
