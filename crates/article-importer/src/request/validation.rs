use serde::{Deserialize, Serialize};

use super::ImportRequest;

/// Error key for the size field.
pub const SIZE_KEY: &str = "size";

/// Error key shared by the keyword, category and tag fields.
pub const SEARCH_TERMS_KEY: &str = "text.category.tag";

pub const SIZE_TOO_SMALL_MESSAGE: &str = "You must import at least one article.";

pub const MISSING_SEARCH_TERMS_MESSAGE: &str =
    "At least one of 'Keyword text search' or 'Category' or 'Tag' fields must be provided.";

/// Inclusive bounds for the requested article count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min: i64,
    pub max: i64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { min: 1, max: 99 }
    }
}

/// Field-level and group-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    /// Error attached to the size field.
    pub size: Option<String>,
    /// Error attached jointly to keyword, category and tag.
    pub search_terms: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.search_terms.is_none()
    }

    /// Looks up an error by form key (`size` or `text.category.tag`).
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            SIZE_KEY => self.size.as_deref(),
            SEARCH_TERMS_KEY => self.search_terms.as_deref(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (SIZE_KEY, self.size.as_deref()),
            (SEARCH_TERMS_KEY, self.search_terms.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, message)| message.map(|m| (key, m)))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(key, message)| format!("{}: {}", key, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Checks `request` against the field rules, then the cross-field rule.
///
/// The cross-field rule only runs once every field rule passes, so a bad
/// size is reported on its own.
pub fn validate(request: &ImportRequest, limits: &SizeLimits) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.size < limits.min {
        errors.size = Some(if limits.min == 1 {
            SIZE_TOO_SMALL_MESSAGE.to_string()
        } else {
            format!("You must import at least {} articles.", limits.min)
        });
    } else if request.size > limits.max {
        errors.size = Some(format!(
            "You can import at most {} articles.",
            limits.max
        ));
    }

    if errors.is_empty() && request.has_no_search_terms() {
        errors.search_terms = Some(MISSING_SEARCH_TERMS_MESSAGE.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
