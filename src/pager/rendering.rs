//! Drawing the visible page onto the render surface.

use std::fmt::Debug;
use std::ops::Range;

use log::trace;
use unicode_width::UnicodeWidthStr;

use super::ListPager;
use crate::error::Result;
use crate::input::InputSource;
use crate::paginator;
use crate::surface::RenderSurface;

/// Offset of the first row from the surface origin, as `(columns, rows)`.
pub const INSET: (i32, i32) = (6, 8);

impl<Id, S, I> ListPager<Id, S, I>
where
    Id: PartialEq + Clone + Debug,
    S: RenderSurface,
    I: InputSource,
{
    fn current_page(&self) -> paginator::Model {
        let mut page = self.paginator.clone().with_total_items(self.items.len());
        page.select_index(self.selected_index().unwrap_or(0));
        page
    }

    /// The index range of the page containing the selection.
    ///
    /// Pages are aligned to multiples of the page size: with 10 rows per page
    /// and the selection at index 12, the range is `10..20`.
    pub fn visible_range(&self) -> Range<usize> {
        let (start, end) = self.current_page().get_slice_bounds(self.items.len());
        start..end
    }

    /// The current page as `"page/total"`, 1-indexed, e.g. `"2/3"`.
    pub fn page_indicator(&self) -> String {
        self.current_page().view()
    }

    /// Redraws the page containing the selection.
    ///
    /// The surface transform is saved, the surface cleared, and the origin
    /// moved by [`INSET`]. Each visible item is written on its own row,
    /// prefixed by the marker if selected and by blank padding of the marker's
    /// width otherwise. The transform is restored afterwards, so repeated
    /// draws produce identical output.
    pub fn draw(&mut self) -> Result<()> {
        let range = self.visible_range();
        trace!(
            "draw rows {:?} of {} (page {})",
            range,
            self.items.len(),
            self.page_indicator()
        );

        let padding = " ".repeat(self.config.marker.width());

        self.surface.save()?;
        self.surface.clear()?;
        self.surface.translate(INSET.0, INSET.1)?;
        for (row, item) in self.items[range].iter().enumerate() {
            let prefix = if self.selected.as_ref() == Some(&item.id) {
                &self.config.marker
            } else {
                &padding
            };
            let line = format!("{}{}", prefix, item.label);
            self.surface.fill_text(&line, 0, row as i32)?;
        }
        self.surface.restore()?;
        self.surface.flush()
    }
}
