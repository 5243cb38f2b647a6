//! Render surfaces the pager draws onto.
//!
//! A surface is a fixed `width × height` grid of character cells with a
//! translatable origin. The pager only ever talks to the [`RenderSurface`]
//! trait; this module provides a crossterm-backed terminal implementation and
//! an in-memory grid for tests and headless use.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Print, ResetColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;

/// Drawing capability consumed by the pager.
///
/// Coordinates passed to [`fill_text`](RenderSurface::fill_text) are relative
/// to the current origin, which [`translate`](RenderSurface::translate) moves
/// and [`save`](RenderSurface::save)/[`restore`](RenderSurface::restore) stack.
/// Text falling outside the surface is clipped.
pub trait RenderSurface {
    /// Blanks every cell. The transform is left untouched.
    fn clear(&mut self) -> Result<()>;

    /// Pushes the current transform.
    fn save(&mut self) -> Result<()>;

    /// Pops the last saved transform. A restore with nothing saved is a no-op.
    fn restore(&mut self) -> Result<()>;

    /// Moves the origin by `(dx, dy)` cells.
    fn translate(&mut self, dx: i32, dy: i32) -> Result<()>;

    /// Writes `text` starting at `(col, row)` relative to the origin.
    fn fill_text(&mut self, text: &str, col: i32, row: i32) -> Result<()>;

    /// Hides the terminal cursor.
    fn hide_cursor(&mut self) -> Result<()>;

    /// Returns the surface to its initial state: identity transform, blank
    /// cells, visible cursor.
    fn reset(&mut self) -> Result<()>;

    /// Pushes any buffered output to the device.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Clips `text` placed at column `x` to `[0, width)`.
///
/// Returns the first visible column and the visible text, or `None` when
/// nothing is visible. Wide characters straddling either edge are dropped.
fn clip_to_width(text: &str, x: i32, width: u16) -> Option<(u16, String)> {
    let width = i32::from(width);
    let mut col = x;
    let mut start = None;
    let mut visible = String::new();

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i32;
        if col < 0 {
            col += w;
            continue;
        }
        if col >= width || col + w > width {
            break;
        }
        start.get_or_insert(col);
        visible.push(ch);
        col += w;
    }

    start.map(|s| (s as u16, visible))
}

#[derive(Debug, Clone, Default)]
struct Transform {
    origin: (i32, i32),
    stack: Vec<(i32, i32)>,
}

impl Transform {
    fn save(&mut self) {
        self.stack.push(self.origin);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.stack.pop() {
            self.origin = origin;
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn apply(&self, col: i32, row: i32) -> (i32, i32) {
        (self.origin.0 + col, self.origin.1 + row)
    }
}

/// A surface that draws to a terminal through crossterm.
///
/// Commands are queued on the writer and sent on [`flush`](RenderSurface::flush).
/// Any `Write` works, which makes it possible to capture the escape stream.
pub struct TermSurface<W: Write> {
    out: W,
    width: u16,
    height: u16,
    transform: Transform,
}

impl TermSurface<io::Stdout> {
    /// Creates a surface over standard output.
    pub fn stdout(width: u16, height: u16) -> Self {
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> TermSurface<W> {
    /// Creates a surface of `width × height` cells over `out`.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            transform: Transform::default(),
        }
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the surface and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TermSurface<W> {
    fn clear(&mut self) -> Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.transform.save();
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.transform.restore();
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.transform.translate(dx, dy);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, col: i32, row: i32) -> Result<()> {
        let (x, y) = self.transform.apply(col, row);
        if y < 0 || y >= i32::from(self.height) {
            return Ok(());
        }
        if let Some((x, visible)) = clip_to_width(text, x, self.width) {
            self.out.queue(MoveTo(x, y as u16))?.queue(Print(visible))?;
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.out.queue(Hide)?;
        self.flush()
    }

    fn reset(&mut self) -> Result<()> {
        self.transform = Transform::default();
        self.out
            .queue(ResetColor)?
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .queue(Show)?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// An in-memory cell grid.
///
/// Useful for tests and for rendering the pager to a string. Besides the
/// cell contents it records how often it was cleared and reset, and whether
/// the cursor is hidden.
///
/// ```rust
/// use list_pager::surface::{BufferSurface, RenderSurface};
///
/// let mut surface = BufferSurface::new(10, 2);
/// surface.translate(2, 1).unwrap();
/// surface.fill_text("hello world", 0, 0).unwrap();
/// assert_eq!(surface.row(1), "  hello wo");
/// ```
#[derive(Debug, Clone)]
pub struct BufferSurface {
    width: u16,
    height: u16,
    // `None` marks the trailing cell of a double-width character.
    cells: Vec<Vec<Option<char>>>,
    transform: Transform,
    clear_count: usize,
    reset_count: usize,
    cursor_hidden: bool,
}

impl BufferSurface {
    /// Creates a blank grid of `width × height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: Self::blank(width, height),
            transform: Transform::default(),
            clear_count: 0,
            reset_count: 0,
            cursor_hidden: false,
        }
    }

    fn blank(width: u16, height: u16) -> Vec<Vec<Option<char>>> {
        vec![vec![Some(' '); width as usize]; height as usize]
    }

    /// Grid dimensions as `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Row `n` with trailing blanks trimmed. Out-of-range rows are empty.
    pub fn row(&self, n: usize) -> String {
        self.cells
            .get(n)
            .map(|cells| {
                let line: String = cells.iter().flatten().collect();
                line.trim_end().to_string()
            })
            .unwrap_or_default()
    }

    /// Every row, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.cells.len()).map(|n| self.row(n)).collect()
    }

    /// The non-blank rows joined by newlines, in grid order.
    pub fn contents(&self) -> String {
        self.lines()
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of times [`clear`](RenderSurface::clear) ran. Each pager draw
    /// clears exactly once, so this doubles as a render counter.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Number of times [`reset`](RenderSurface::reset) ran.
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    /// Whether the cursor is currently hidden.
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Depth of the saved-transform stack. Zero after a balanced draw.
    pub fn saved_depth(&self) -> usize {
        self.transform.stack.len()
    }
}

impl RenderSurface for BufferSurface {
    fn clear(&mut self) -> Result<()> {
        self.cells = Self::blank(self.width, self.height);
        self.clear_count += 1;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.transform.save();
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.transform.restore();
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.transform.translate(dx, dy);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, col: i32, row: i32) -> Result<()> {
        let (x, y) = self.transform.apply(col, row);
        if y < 0 || y >= i32::from(self.height) {
            return Ok(());
        }
        let Some((x, visible)) = clip_to_width(text, x, self.width) else {
            return Ok(());
        };

        let line = &mut self.cells[y as usize];
        let mut col = x as usize;
        for ch in visible.chars() {
            match ch.width().unwrap_or(0) {
                0 => {}
                1 => {
                    line[col] = Some(ch);
                    col += 1;
                }
                _ => {
                    line[col] = Some(ch);
                    line[col + 1] = None;
                    col += 2;
                }
            }
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.cells = Self::blank(self.width, self.height);
        self.transform = Transform::default();
        self.cursor_hidden = false;
        self.reset_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_to_width() {
        assert_eq!(clip_to_width("abcdef", 0, 4), Some((0, "abcd".to_string())));
        assert_eq!(clip_to_width("abcdef", 2, 4), Some((2, "ab".to_string())));
        assert_eq!(clip_to_width("abcdef", -2, 4), Some((0, "cdef".to_string())));
        assert_eq!(clip_to_width("abc", 4, 4), None);
        // A double-width glyph that would straddle the edge is dropped.
        assert_eq!(clip_to_width("a漢", 2, 4), Some((2, "a".to_string())));
    }

    #[test]
    fn test_buffer_translate_and_restore() {
        let mut surface = BufferSurface::new(20, 5);
        surface.save().unwrap();
        surface.translate(3, 1).unwrap();
        surface.fill_text("x", 0, 0).unwrap();
        surface.restore().unwrap();
        surface.fill_text("y", 0, 0).unwrap();

        assert_eq!(surface.row(0), "y");
        assert_eq!(surface.row(1), "   x");
        assert_eq!(surface.saved_depth(), 0);
    }

    #[test]
    fn test_buffer_clips_rows_outside_height() {
        let mut surface = BufferSurface::new(10, 2);
        surface.fill_text("gone", 0, 2).unwrap();
        surface.fill_text("gone", 0, -1).unwrap();
        assert_eq!(surface.contents(), "");
    }

    #[test]
    fn test_buffer_wide_characters() {
        let mut surface = BufferSurface::new(10, 1);
        surface.fill_text("漢字ok", 0, 0).unwrap();
        assert_eq!(surface.row(0), "漢字ok");
    }

    #[test]
    fn test_buffer_reset() {
        let mut surface = BufferSurface::new(10, 2);
        surface.translate(1, 1).unwrap();
        surface.hide_cursor().unwrap();
        surface.fill_text("a", 0, 0).unwrap();
        surface.reset().unwrap();

        assert!(!surface.cursor_hidden());
        assert_eq!(surface.reset_count(), 1);
        assert_eq!(surface.contents(), "");
        surface.fill_text("b", 0, 0).unwrap();
        assert_eq!(surface.row(0), "b");
    }

    #[test]
    fn test_term_surface_emits_positioned_text() {
        let mut surface = TermSurface::new(Vec::new(), 20, 20);
        surface.translate(6, 8).unwrap();
        surface.fill_text("item", 0, 1).unwrap();
        surface.flush().unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        // MoveTo is 1-based in the escape sequence: row 9 + 1, column 6 + 1.
        assert!(out.contains("\x1b[10;7H"));
        assert!(out.contains("item"));
    }

    #[test]
    fn test_term_surface_drops_offscreen_rows() {
        let mut surface = TermSurface::new(Vec::new(), 20, 2);
        surface.fill_text("hidden", 0, 5).unwrap();
        assert!(surface.get_ref().is_empty());
    }
}
