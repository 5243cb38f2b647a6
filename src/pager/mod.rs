//! Scrollable selection list with page-aligned rendering.
//!
//! [`ListPager`] keeps an ordered list of labeled items and one selected
//! item. It draws the page that contains the selection onto a
//! [`RenderSurface`](crate::surface::RenderSurface) and reacts to key presses
//! from an [`InputSource`](crate::input::InputSource).
//!
//! ## Paging
//!
//! Pages are aligned to multiples of the page size. With 10 rows per page,
//! selecting index 12 shows items `10..20`; moving up to index 9 flips to
//! `0..10`. The page never scrolls by single rows.
//!
//! ## Notifications
//!
//! Observers subscribe per [`EventKind`] and receive an [`Event`]:
//!
//! - `Keypress`: every decoded key, with the selection at that moment
//! - `Select`: an item became selected
//! - `Remove`: an item is about to be removed
//! - `Empty`: the last item was removed
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use list_pager::input::ScriptedInput;
//! use list_pager::pager::{Event, EventKind, ListPager, PagerConfig};
//! use list_pager::surface::BufferSurface;
//!
//! let mut pager = ListPager::new(
//!     PagerConfig::default(),
//!     BufferSurface::new(100, 200),
//!     ScriptedInput::default(),
//! );
//!
//! let selections = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&selections);
//! pager.on(EventKind::Select, move |event: &Event<'_, &str>| {
//!     if let Event::Select(id) = event {
//!         log.borrow_mut().push(id.to_string());
//!     }
//! });
//!
//! pager.add("a", "first").unwrap();
//! pager.add("b", "second").unwrap();
//! pager.down().unwrap();
//! assert_eq!(*selections.borrow(), vec!["a", "b"]);
//! ```

mod events;
mod keys;
mod lifecycle;
mod model;
mod rendering;
mod types;


pub use events::{Callback, Event, EventKind, ObserverId, Observers};
pub use keys::PagerKeyMap;
pub use model::ListPager;
pub use rendering::INSET;
pub use types::{Item, PagerConfig};

use std::fmt::Debug;

use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use log::trace;

use crate::error::Result;
use crate::input::InputSource;
use crate::key::KeyPress;
use crate::surface::RenderSurface;

impl<Id, S, I> ListPager<Id, S, I>
where
    Id: PartialEq + Clone + Debug,
    S: RenderSurface,
    I: InputSource,
{
    /// Handles one key press.
    ///
    /// Events without a decoded key are dropped. Otherwise a
    /// [`Event::Keypress`] is emitted with the current selection, then the
    /// key is dispatched: `up` and `down` move the selection and `ctrl+c`
    /// stops the pager. Other keys do nothing further.
    pub fn on_keypress(&mut self, ch: Option<char>, key: Option<&KeyPress>) -> Result<()> {
        let Some(key) = key else {
            return Ok(());
        };
        trace!("keypress {:?} ctrl={} ch={:?}", key.name, key.ctrl, ch);

        self.observers.emit(&Event::Keypress {
            key,
            selected: self.selected.as_ref(),
        });

        if self.keymap.cursor_up.matches(key) {
            self.up()
        } else if self.keymap.cursor_down.matches(key) {
            self.down()
        } else if self.keymap.force_quit.matches(key) {
            self.stop()
        } else {
            Ok(())
        }
    }

    /// Handles a bubbletea-rs message.
    ///
    /// Key messages are decoded and passed to
    /// [`on_keypress`](ListPager::on_keypress); all other messages are ignored.
    pub fn update_msg(&mut self, msg: &Msg) -> Result<()> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let ch = match key_msg.key {
                KeyCode::Char(c) => Some(c),
                _ => None,
            };
            let key = KeyPress::from_key_msg(key_msg);
            return self.on_keypress(ch, key.as_ref());
        }
        Ok(())
    }
}
