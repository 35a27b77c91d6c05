use serde::{Deserialize, Serialize};

use crate::domain::entities::record::Record;

pub const DEFAULT_PER_PAGE: u32 = 20;

/// Server-computed description of one result window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// `page 1 of 1`, nothing before or after.
    pub fn single_empty_page() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_pages: 1,
            total_items: 0,
            has_next: false,
            has_prev: false,
        }
    }

    pub fn for_window(page: u32, per_page: u32, total_items: u64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(u64::from(per_page)).max(1);
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);
        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total_pages >= 1
            && self.per_page >= 1
            && (1..=self.total_pages).contains(&self.page)
            && self.has_next == (self.page < self.total_pages)
            && self.has_prev == (self.page > 1)
    }

    /// Clamps `page` into `[1, total_pages]` and recomputes the navigation
    /// flags so they always agree with the page numbers.
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        let page = self.page.clamp(1, total_pages);
        Self {
            page,
            per_page: self.per_page.max(1),
            total_pages,
            total_items: self.total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::single_empty_page()
    }
}

/// Body of `/api/data`: records plus the window they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResult {
    #[serde(rename = "data")]
    pub records: Vec<Record>,
    pub pagination: PaginationInfo,
}

impl PaginatedResult {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            pagination: PaginationInfo::single_empty_page(),
        }
    }
}

impl Default for PaginatedResult {
    fn default() -> Self {
        Self::empty()
    }
}
