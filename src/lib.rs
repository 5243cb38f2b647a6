#![warn(missing_docs)]

//! # list-pager
//!
//! A scrollable, keyboard-navigable selection list for the terminal.
//!
//! ## Overview
//!
//! [`ListPager`] keeps an ordered collection of labeled items and tracks a
//! single selected item. On every navigation or mutation it redraws a
//! fixed-size page of items around the selection. Pages are aligned to the
//! page size, so the visible window only changes when the selection crosses
//! a page boundary.
//!
//! Drawing and keyboard input are capabilities injected into the pager:
//!
//! - [`surface::RenderSurface`]: clear, save/restore, translate, write text,
//!   hide the cursor, reset. [`surface::TermSurface`] drives a real terminal
//!   through crossterm; [`surface::BufferSurface`] is an in-memory grid.
//! - [`input::InputSource`]: raw mode, pause/resume, and a stream of decoded
//!   key presses. [`input::TermInput`] reads the terminal;
//!   [`input::ScriptedInput`] replays a queue of events.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use list_pager::prelude::*;
//!
//! fn main() -> list_pager::Result<()> {
//!     let mut pager = ListPager::terminal(PagerConfig::default());
//!     pager.add("tea", "Afternoon tea")?;
//!     pager.add("socks", "Nice socks")?;
//!     pager.run()?; // ↑/↓ to move, ctrl+c to quit
//!     println!("picked {:?}", pager.selected());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Operations return [`Result`]. Besides terminal I/O failures, the pager
//! refuses to break its own invariants: adding a duplicate id, selecting an
//! unknown id, and updating or removing a missing id are all errors.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (`debug` for selection and
//! lifecycle changes, `trace` for key dispatch and draws). It never installs
//! a logger; when drawing to the terminal, log to a file.

pub mod error;
pub mod input;
pub mod key;
pub mod pager;
pub mod paginator;
pub mod surface;

pub use error::{PagerError, Result};
pub use input::{InputEvent, InputSource, ScriptedInput, TermInput};
pub use key::{Binding, KeyMap, KeyPress};
pub use pager::{Event, EventKind, Item, ListPager, ObserverId, PagerConfig, PagerKeyMap};
pub use paginator::Model as Paginator;
pub use surface::{BufferSurface, RenderSurface, TermSurface};

/// Prelude module for convenient imports.
///
/// ```rust
/// use list_pager::prelude::*;
///
/// let mut pager = ListPager::new(
///     PagerConfig::default(),
///     BufferSurface::new(100, 200),
///     ScriptedInput::default(),
/// );
/// pager.add(1u32, "one").unwrap();
/// assert_eq!(pager.selected(), Some(&1));
/// ```
pub mod prelude {
    pub use crate::error::{PagerError, Result};
    pub use crate::input::{InputEvent, InputSource, ScriptedInput, TermInput};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::pager::{Event, EventKind, Item, ListPager, PagerConfig, PagerKeyMap};
    pub use crate::surface::{BufferSurface, RenderSurface, TermSurface};
}
