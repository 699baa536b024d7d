//! The seam between a gesture host and the list it mutates.

use crate::adapter::ListAdapter;
use crate::change::Change;
use crate::error::AdapterError;
use crate::item::Item;

/// Mutation entry points a gesture host drives.
///
/// The host only promises that positions were valid when it last asked
/// for [`item_count`](TouchTarget::item_count); implementations still
/// reject anything out of range.
pub trait TouchTarget {
    /// Number of rows currently shown.
    fn item_count(&self) -> usize;

    /// The row to render at `position`.
    fn item_at(&self, position: usize) -> Result<&Item, AdapterError>;

    /// A drag gesture carried the row at `from` over the row at `to`.
    fn move_item(&mut self, from: usize, to: usize) -> Result<Change, AdapterError>;

    /// A swipe gesture dismissed the row at `position`.
    fn dismiss_item(&mut self, position: usize) -> Result<Change, AdapterError>;
}

impl TouchTarget for ListAdapter {
    fn item_count(&self) -> usize {
        ListAdapter::item_count(self)
    }

    fn item_at(&self, position: usize) -> Result<&Item, AdapterError> {
        ListAdapter::item_at(self, position)
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<Change, AdapterError> {
        ListAdapter::move_item(self, from, to)
    }

    fn dismiss_item(&mut self, position: usize) -> Result<Change, AdapterError> {
        ListAdapter::dismiss_item(self, position)
    }
}
