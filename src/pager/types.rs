//! Items and configuration for the list pager.

/// One row of the list: an opaque id and the label shown for it.
///
/// The pager never interprets `id`; it only compares ids for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<Id> {
    /// Identity of the item. Unique within a pager.
    pub id: Id,
    /// Text displayed for the item.
    pub label: String,
}

impl<Id> Item<Id> {
    /// Creates an item.
    pub fn new(id: Id, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Construction-time settings of a pager.
///
/// The pager keeps its own copy; changing a config after construction has
/// no effect on an existing pager.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::PagerConfig;
///
/// let config = PagerConfig::default()
///     .with_marker("> ")
///     .with_page_size(5);
///
/// assert_eq!(config.marker, "> ");
/// assert_eq!(config.page_size, 5);
/// assert_eq!((config.width, config.height), (100, 200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// Prefix written before the selected row. Other rows get blank padding
    /// of the same display width.
    pub marker: String,
    /// Surface width in character cells.
    pub width: u16,
    /// Surface height in character cells.
    pub height: u16,
    /// Number of rows per page. Always at least 1.
    pub page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            marker: "› ".to_string(),
            width: 100,
            height: 200,
            page_size: 10,
        }
    }
}

impl PagerConfig {
    /// Sets the selection marker (builder pattern).
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the surface dimensions (builder pattern).
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the page size (builder pattern). Values less than 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
