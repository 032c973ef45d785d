//! Observable collections for Dockhand.
//!
//! [`ObservableList`] is an ordered sequence of items with synchronous
//! add/remove notification. It backs the node registry and the pluggable
//! groups of consoles/toolbars that application code contributes after
//! startup.
//!
//! The list is a cheap cloneable handle: producer and consumer sides share
//! one underlying sequence, and listeners connected through
//! [`item_added`](ObservableList::item_added) /
//! [`item_removed`](ObservableList::item_removed) observe every mutation in
//! call order.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::signal::Signal;

/// An ordered, observable sequence of items.
///
/// Notifications fire synchronously, in connection order, after the list
/// lock has been released; a listener may therefore read the list (or
/// mutate it) from inside its slot.
pub struct ObservableList<T> {
    inner: Arc<ListInner<T>>,
}

struct ListInner<T> {
    items: Mutex<Vec<T>>,
    item_added: Signal<T>,
    item_removed: Signal<T>,
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObservableList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ListInner {
                items: Mutex::new(Vec::new()),
                item_added: Signal::new(),
                item_removed: Signal::new(),
            }),
        }
    }

    /// Get the number of items in the list.
    pub fn len(&self) -> usize {
        self.inner.items.lock().len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.items.lock().is_empty()
    }

    /// Signal emitted after an item has been appended.
    pub fn item_added(&self) -> &Signal<T> {
        &self.inner.item_added
    }

    /// Signal emitted after an item has been removed.
    pub fn item_removed(&self) -> &Signal<T> {
        &self.inner.item_removed
    }
}

impl<T: Clone> ObservableList<T> {
    /// Append an item and notify listeners.
    pub fn push(&self, item: T) {
        self.inner.items.lock().push(item.clone());
        self.inner.item_added.emit(item);
    }

    /// Get a snapshot of all items, in insertion order.
    pub fn items(&self) -> Vec<T> {
        self.inner.items.lock().clone()
    }

    /// Get a clone of the item at `index`, if present.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.items.lock().get(index).cloned()
    }

    /// Get a clone of the first item, if any.
    pub fn first(&self) -> Option<T> {
        self.inner.items.lock().first().cloned()
    }
}

impl<T: Clone + PartialEq> ObservableList<T> {
    /// Remove the first occurrence of `item` and notify listeners.
    ///
    /// Removing an item that is not present is a silent no-op.
    pub fn remove(&self, item: &T) {
        let removed = {
            let mut items = self.inner.items.lock();
            match items.iter().position(|existing| existing == item) {
                Some(index) => Some(items.remove(index)),
                None => None,
            }
        };
        if let Some(removed) = removed {
            self.inner.item_removed.emit(removed);
        }
    }

    /// Check whether the list contains `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.inner.items.lock().iter().any(|existing| existing == item)
    }
}
