//! Page-aligned window arithmetic for the list pager.
//!
//! The paginator does not render items. It tracks which page is current and
//! computes the slice bounds of that page so the pager can draw exactly the
//! rows that belong to it.

/// Pagination state: current page, page size, and page count.
///
/// # Examples
///
/// ```rust
/// use list_pager::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(10)
///     .with_total_items(25); // 3 pages
///
/// assert_eq!(paginator.total_pages, 3);
/// paginator.select_index(12);
/// assert_eq!(paginator.page, 1);
/// assert_eq!(paginator.get_slice_bounds(25), (10, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The current page (0-indexed).
    pub page: usize,
    /// Number of items per page. Always at least 1.
    pub per_page: usize,
    /// Total number of pages. Always at least 1.
    pub total_pages: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total_pages: 1,
        }
    }
}

impl Model {
    /// Creates a paginator with one item per page and a single page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    ///
    /// ```rust
    /// use list_pager::paginator::Model;
    ///
    /// assert_eq!(Model::new().with_per_page(0).per_page, 1);
    /// ```
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total item count and recomputes the page count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page. Values less than 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes `total_pages` from the item count.
    ///
    /// Zero items still yields one (empty) page. If the current page falls
    /// out of range it is moved to the last page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Moves to the page that contains `index`.
    ///
    /// The page is `floor(index / per_page)`, clamped to the last page.
    pub fn select_index(&mut self, index: usize) {
        self.page = (index / self.per_page).min(self.total_pages - 1);
    }

    /// Returns `(start, end)` bounds of the current page for a slice of `length`.
    ///
    /// `start` is inclusive and `end` exclusive. Both are clamped to `length`,
    /// so the result is always a valid range.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Renders the position as `"page/total"` (1-indexed), e.g. `"2/3"`.
    pub fn view(&self) -> String {
        format!("{}/{}", self.page + 1, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let paginator = Model::new().with_per_page(10).with_total_items(95);
        assert_eq!(paginator.total_pages, 10);

        let paginator = Model::new().with_per_page(10).with_total_items(100);
        assert_eq!(paginator.total_pages, 10);
    }

    #[test]
    fn test_zero_items_keeps_one_page() {
        let paginator = Model::new().with_per_page(10).with_total_items(0);
        assert_eq!(paginator.total_pages, 1);
        assert_eq!(paginator.get_slice_bounds(0), (0, 0));
    }

    #[test]
    fn test_page_alignment() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(25);

        paginator.select_index(0);
        assert_eq!(paginator.get_slice_bounds(25), (0, 10));

        paginator.select_index(12);
        assert_eq!(paginator.get_slice_bounds(25), (10, 20));

        paginator.select_index(24);
        assert_eq!(paginator.get_slice_bounds(25), (20, 25));
        assert_eq!(paginator.page, paginator.total_pages - 1);
    }

    #[test]
    fn test_shrinking_clamps_page() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(30);
        paginator.select_index(29);
        assert_eq!(paginator.page, 2);

        paginator.set_total_items(11);
        assert_eq!(paginator.page, 1);
        assert_eq!(paginator.get_slice_bounds(11), (10, 11));
    }

    #[test]
    fn test_view() {
        let mut paginator = Model::new().with_per_page(5).with_total_items(12);
        assert_eq!(paginator.view(), "1/3");
        paginator.select_index(7);
        assert_eq!(paginator.view(), "2/3");
    }
}
