//! Listing query parameters.

use serde::Deserialize;

/// Query string of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// 1-indexed page.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Free-text search.
    #[serde(default)]
    pub query: Option<String>,
    /// Field to sort by.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `asc` for ascending, anything else descending.
    #[serde(default)]
    pub sort_type: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            query: None,
            sort_by: None,
            sort_type: None,
        }
    }
}

impl ListQuery {
    /// The trimmed search text, `None` when absent or blank.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// `asc` maps to ascending, every other value to descending.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

/// A resolved sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    /// Primary sort field. The record ID is always the secondary key.
    pub field: F,
    /// Order for both keys.
    pub direction: SortDirection,
}
