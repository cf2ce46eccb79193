//! Paginated listings

use serde::{Deserialize, Serialize};

/// One page of a backend listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    /// Wrap an unpaginated result (e.g. search hits) as a single page
    pub fn single(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            total_elements: len as u64,
            total_pages: 1,
            number: 0,
            size: len as u32,
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

/// Zero-based page numbers for the pager: up to five, starting two before `current`
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    let start = current.saturating_sub(2);
    let end = total_pages.min(start + 5);
    (start..end).collect()
}
