// src/search/pagination.rs

pub const ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Where the user is in the current result set.
///
/// `current_page` is always within `1..=total_pages`; every way of building or
/// moving this value clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

impl PaginationState {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        items_per_page: usize,
    ) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            total_items,
            items_per_page: if items_per_page == 0 {
                ITEMS_PER_PAGE
            } else {
                items_per_page
            },
        }
    }

    /// A state that only knows which page was asked for. Used before the
    /// backend has told us how many pages exist.
    pub fn requested(page: usize) -> Self {
        Self::new(page, page.max(1), 0, ITEMS_PER_PAGE)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn visible_pages(&self) -> Vec<usize> {
        visible_page_numbers(self.current_page, self.total_pages, DEFAULT_PAGE_WINDOW)
    }
}

/// Up to `window` consecutive page numbers, centred on `current` as far as the
/// bounds allow and never leaving `1..=total`.
pub fn visible_page_numbers(current: usize, total: usize, window: usize) -> Vec<usize> {
    if window == 0 {
        return vec![];
    }
    let total = total.max(1);

    let latest_start = (total + 1).saturating_sub(window).max(1);
    let centred_start = current.saturating_sub(window / 2);
    let start = centred_start.min(latest_start).max(1);
    let end = (start + window - 1).min(total);

    (start..=end).collect()
}
