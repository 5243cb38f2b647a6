//! Notifications emitted by the pager and the observer registry that
//! delivers them.

use std::fmt;

use crate::key::KeyPress;

/// The kind of a notification, used to subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A decoded key press arrived.
    Keypress,
    /// An item became selected.
    Select,
    /// An item is about to be removed.
    Remove,
    /// The last item was removed.
    Empty,
}

/// A notification, borrowed from pager state for the duration of delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a, Id> {
    /// A key press with the selection at the time it arrived.
    Keypress {
        /// The decoded key.
        key: &'a KeyPress,
        /// The selected id, or `None` if the list is empty.
        selected: Option<&'a Id>,
    },
    /// `id` became selected.
    Select(&'a Id),
    /// `id` is being removed. Fired before the list changes.
    Remove(&'a Id),
    /// The list became empty.
    Empty,
}

impl<Id> Event<'_, Id> {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Keypress { .. } => EventKind::Keypress,
            Event::Select(_) => EventKind::Select,
            Event::Remove(_) => EventKind::Remove,
            Event::Empty => EventKind::Empty,
        }
    }
}

/// Handle returned by [`Observers::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback type for observers.
pub type Callback<Id> = Box<dyn FnMut(&Event<'_, Id>)>;

struct Entry<Id> {
    id: ObserverId,
    kind: EventKind,
    callback: Callback<Id>,
}

/// Per-kind observer lists. Delivery is synchronous, in registration order.
pub struct Observers<Id> {
    next_id: u64,
    entries: Vec<Entry<Id>>,
}

impl<Id> Default for Observers<Id> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<Id> fmt::Debug for Observers<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<Id> Observers<Id> {
    /// Registers `callback` for events of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&Event<'_, Id>) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes an observer. Returns false if it was already gone.
    pub fn off(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Number of observers registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    /// Delivers `event` to every observer of its kind.
    pub fn emit(&mut self, event: &Event<'_, Id>) {
        let kind = event.kind();
        for entry in self.entries.iter_mut().filter(|entry| entry.kind == kind) {
            (entry.callback)(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_only_matching_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<u32> = Observers::default();

        let log = Rc::clone(&seen);
        observers.on(EventKind::Select, move |event| {
            if let Event::Select(id) = event {
                log.borrow_mut().push(**id);
            }
        });

        observers.emit(&Event::Select(&7));
        observers.emit(&Event::Remove(&8));
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_multiple_observers_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<u32> = Observers::default();

        for tag in ["first", "second"] {
            let log = Rc::clone(&seen);
            observers.on(EventKind::Empty, move |_| log.borrow_mut().push(tag));
        }

        observers.emit(&Event::Empty);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_off_unsubscribes_once() {
        let mut observers: Observers<u32> = Observers::default();
        let id = observers.on(EventKind::Empty, |_| {});
        assert_eq!(observers.count(EventKind::Empty), 1);

        assert!(observers.off(id));
        assert!(!observers.off(id));
        assert_eq!(observers.count(EventKind::Empty), 0);
    }
}
