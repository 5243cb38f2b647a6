//! The pager struct, construction, lookups, and item/selection operations.

use std::fmt::Debug;
use std::io::Stdout;

use log::debug;

use super::events::{Event, EventKind, ObserverId, Observers};
use super::keys::PagerKeyMap;
use super::types::{Item, PagerConfig};
use crate::error::{PagerError, Result};
use crate::input::{InputSource, TermInput};
use crate::paginator;
use crate::surface::{RenderSurface, TermSurface};

/// A scrollable, keyboard-navigable selection list.
///
/// The pager owns an ordered list of [`Item`]s and the id of the selected
/// one. Every mutation redraws the page containing the selection onto the
/// surface `S`. Key presses come from the input source `I`.
///
/// # Invariants
///
/// - The selection is `None` exactly when the list is empty.
/// - Otherwise it names exactly one item: ids are unique and `select`
///   refuses unknown ids.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::{ListPager, PagerConfig};
/// use list_pager::surface::BufferSurface;
/// use list_pager::input::ScriptedInput;
///
/// let mut pager = ListPager::new(
///     PagerConfig::default().with_size(40, 12),
///     BufferSurface::new(40, 12),
///     ScriptedInput::default(),
/// );
///
/// pager.add(1, "apples").unwrap();
/// pager.add(2, "pears").unwrap();
/// assert_eq!(pager.selected(), Some(&1));
///
/// pager.down().unwrap();
/// assert_eq!(pager.selected(), Some(&2));
/// assert_eq!(pager.surface().row(8), "        apples");
/// assert_eq!(pager.surface().row(9), "      › pears");
/// ```
pub struct ListPager<Id, S = TermSurface<Stdout>, I = TermInput> {
    pub(super) items: Vec<Item<Id>>,
    pub(super) selected: Option<Id>,
    pub(super) config: PagerConfig,
    pub(super) paginator: paginator::Model,
    pub(super) keymap: PagerKeyMap,
    pub(super) observers: Observers<Id>,
    pub(super) surface: S,
    pub(super) input: I,
    pub(super) attached: bool,
}

impl<Id> ListPager<Id, TermSurface<Stdout>, TermInput>
where
    Id: PartialEq + Clone + Debug,
{
    /// Creates a pager that draws to standard output and reads the terminal.
    pub fn terminal(config: PagerConfig) -> Self {
        let surface = TermSurface::stdout(config.width, config.height);
        Self::new(config, surface, TermInput::new())
    }
}

impl<Id, S, I> ListPager<Id, S, I>
where
    Id: PartialEq + Clone + Debug,
    S: RenderSurface,
    I: InputSource,
{
    /// Creates an empty pager over the given surface and input source.
    ///
    /// The surface should already be sized to `config.width × config.height`.
    pub fn new(config: PagerConfig, surface: S, input: I) -> Self {
        let config = PagerConfig {
            page_size: config.page_size.max(1),
            ..config
        };
        let paginator = paginator::Model::new().with_per_page(config.page_size);
        debug!(
            "pager created: {}x{}, {} rows per page",
            config.width, config.height, config.page_size
        );

        Self {
            items: Vec::new(),
            selected: None,
            config,
            paginator,
            keymap: PagerKeyMap::default(),
            observers: Observers::default(),
            surface,
            input,
            attached: false,
        }
    }

    /// The item at `index`, if any.
    pub fn at(&self, index: usize) -> Option<&Item<Id>> {
        self.items.get(index)
    }

    /// The item with the given id, if any.
    pub fn get(&self, id: &Id) -> Option<&Item<Id>> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub(super) fn position(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// Appends an item.
    ///
    /// The first item added to an empty list becomes selected, which emits
    /// [`Event::Select`]. Every add redraws.
    ///
    /// # Errors
    ///
    /// [`PagerError::DuplicateId`] if an item with `id` already exists. The
    /// list is left unchanged.
    pub fn add(&mut self, id: Id, label: impl Into<String>) -> Result<()> {
        if self.position(&id).is_some() {
            return Err(PagerError::DuplicateId);
        }
        self.items.push(Item::new(id.clone(), label));

        if self.selected.is_none() {
            self.select(id)
        } else {
            self.draw()
        }
    }

    /// Removes an item, or the selected item when `id` is `None`.
    ///
    /// [`Event::Remove`] fires before the list changes. If the list becomes
    /// empty, the selection is cleared, [`Event::Empty`] fires, and the empty
    /// page is drawn. Otherwise the item before the removed one is selected;
    /// when the first item was removed, the new first item is selected.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if no item matches, including `remove(None)`
    /// on an empty list. Nothing is emitted in that case.
    pub fn remove(&mut self, id: Option<&Id>) -> Result<()> {
        let target = match id {
            Some(id) => id.clone(),
            None => self.selected.clone().ok_or(PagerError::NotFound)?,
        };
        let index = self.position(&target).ok_or(PagerError::NotFound)?;

        self.observers.emit(&Event::Remove(&target));
        self.items.remove(index);
        debug!("removed {:?} at index {}", target, index);

        if self.items.is_empty() {
            self.selected = None;
            self.observers.emit(&Event::Empty);
            return self.draw();
        }

        let anchor = index.saturating_sub(1);
        let next = self.items[anchor].id.clone();
        self.select(next)
    }

    /// Replaces the label of the item with `id` and redraws.
    ///
    /// The selection and the item order are unchanged.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if no item matches.
    pub fn update(&mut self, id: &Id, label: impl Into<String>) -> Result<()> {
        let index = self.position(id).ok_or(PagerError::NotFound)?;
        self.items[index].label = label.into();
        self.draw()
    }

    /// Selects the item with `id`, emits [`Event::Select`], and redraws.
    ///
    /// # Errors
    ///
    /// [`PagerError::InvalidSelection`] if no item matches. The selection is
    /// left unchanged and nothing is emitted.
    pub fn select(&mut self, id: Id) -> Result<()> {
        if self.position(&id).is_none() {
            return Err(PagerError::InvalidSelection);
        }
        self.observers.emit(&Event::Select(&id));
        debug!("selected {:?}", id);
        self.selected = Some(id);
        self.draw()
    }

    /// Moves the selection to the previous item. No-op on the first item.
    pub fn up(&mut self) -> Result<()> {
        match self.selected_index() {
            Some(index) if index > 0 => {
                let id = self.items[index - 1].id.clone();
                self.select(id)
            }
            _ => Ok(()),
        }
    }

    /// Moves the selection to the next item. No-op on the last item.
    pub fn down(&mut self) -> Result<()> {
        match self.selected_index() {
            Some(index) if index + 1 < self.items.len() => {
                let id = self.items[index + 1].id.clone();
                self.select(id)
            }
            _ => Ok(()),
        }
    }

    /// True when the selection satisfies the pager's invariants: `None` on an
    /// empty list, otherwise the id of exactly one item.
    pub fn is_valid_selection(&self) -> bool {
        match &self.selected {
            None => self.items.is_empty(),
            Some(id) => self.items.iter().filter(|item| item.id == *id).count() == 1,
        }
    }

    /// Subscribes `callback` to notifications of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&Event<'_, Id>) + 'static,
    ) -> ObserverId {
        self.observers.on(kind, callback)
    }

    /// Unsubscribes an observer. Returns false if it was already gone.
    pub fn off(&mut self, observer: ObserverId) -> bool {
        self.observers.off(observer)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in display order.
    pub fn items(&self) -> &[Item<Id>] {
        &self.items
    }

    /// The selected id, or `None` if the list is empty.
    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    /// Position of the selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|id| self.position(id))
    }

    /// The configuration the pager was built with.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The key bindings the pager dispatches on.
    pub fn keymap(&self) -> &PagerKeyMap {
        &self.keymap
    }

    /// Whether the pager is attached to its input source.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Mutable access to the input source, for callers running their own
    /// event loop.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
