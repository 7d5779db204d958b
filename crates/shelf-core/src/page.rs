//! Pagination request and result envelope shared by every list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Page size used when a controller is constructed without one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Sort direction for a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Wire spelling of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(InvalidInputError::SortDirection {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// A sorted column together with its direction.
///
/// Column and direction travel together so a request can never carry one
/// without the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    /// Display column name, e.g. `title` or `borrowedBook`.
    pub column: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

/// Pagination and sort parameters controlling which page is fetched.
///
/// The page size is always positive; an absent sort means server-default
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_index: u32,
    page_size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Create a request for the given page.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_size` is zero.
    pub fn new(page_index: u32, page_size: u32) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(InvalidInputError::PageSize.into());
        }
        Ok(Self {
            page_index,
            page_size,
            sort: None,
        })
    }

    /// Returns this request with the given sort applied.
    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Merge a partial update into this request, field by field.
    ///
    /// Fields absent from `delta` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the delta sets a zero page size.
    pub fn merge(&self, delta: &PageRequestDelta) -> Result<Self, Error> {
        let page_size = delta.page_size.unwrap_or(self.page_size);
        if page_size == 0 {
            return Err(InvalidInputError::PageSize.into());
        }

        Ok(Self {
            page_index: delta.page_index.unwrap_or(self.page_index),
            page_size,
            sort: match &delta.sort {
                Some(sort) => sort.clone(),
                None => self.sort.clone(),
            },
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

/// A partial [`PageRequest`] produced by a page or sort event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequestDelta {
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
    /// `Some(None)` clears the sort; `None` leaves it untouched.
    pub sort: Option<Option<Sort>>,
}

impl PageRequestDelta {
    /// A page-change event.
    pub fn page(page_index: u32) -> Self {
        Self {
            page_index: Some(page_index),
            ..Self::default()
        }
    }

    /// A page-change event that also changes the page size.
    pub fn page_with_size(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index: Some(page_index),
            page_size: Some(page_size),
            sort: None,
        }
    }

    /// A sort-change event.
    pub fn sort(sort: Sort) -> Self {
        Self {
            sort: Some(Some(sort)),
            ..Self::default()
        }
    }

    /// A sort-change event that returns to server-default ordering.
    pub fn clear_sort() -> Self {
        Self {
            sort: Some(None),
            ..Self::default()
        }
    }

    /// An empty delta; merging it re-issues the current request.
    pub fn none() -> Self {
        Self::default()
    }
}

/// One window of a larger server-side result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page_index: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Check the envelope invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the page holds more items than its size.
    pub fn validate(&self) -> Result<(), Error> {
        if self.content.len() > self.page_size as usize {
            return Err(Error::Decode {
                message: format!(
                    "page holds {} items but its size is {}",
                    self.content.len(),
                    self.page_size
                ),
            });
        }
        Ok(())
    }

    /// Number of pages in the full result set.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        u64::from(self.page_index) + 1 < self.page_count()
    }
}
