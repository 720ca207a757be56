//! The flat import request model and its validation rules.

pub mod validation;

use serde::{Deserialize, Serialize};

use crate::catalog::CategorySink;

pub use validation::{validate, SizeLimits, ValidationErrors, SEARCH_TERMS_KEY, SIZE_KEY};

/// Number of articles requested when the form is first opened.
pub const DEFAULT_SIZE: i64 = 20;

/// What to import. Serializes to the wire payload accepted by the import
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub text: String,
    pub category: String,
    pub tag: String,
    pub size: i64,
}

impl ImportRequest {
    pub fn with_size(size: i64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// True when none of the search terms carry a value.
    ///
    /// Emptiness is exact: a single space counts as a value.
    pub fn has_no_search_terms(&self) -> bool {
        self.text.is_empty() && self.category.is_empty() && self.tag.is_empty()
    }
}

impl Default for ImportRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: String::new(),
            tag: String::new(),
            size: DEFAULT_SIZE,
        }
    }
}

impl CategorySink for ImportRequest {
    fn set_category(&mut self, value: &str) {
        self.category = value.to_string();
    }
}
