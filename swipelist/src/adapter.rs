//! List adapter.

use log::{debug, warn};

use crate::change::Change;
use crate::error::AdapterError;
use crate::item::Item;

/// Ordered backing store for a list view.
///
/// `ListAdapter` owns the rows in display order and applies the two
/// gesture mutations:
/// - reorder: the rows at two positions exchange places
/// - dismiss: the row at a position is removed and the tail shifts up
///
/// Every successful mutation returns the [`Change`] the rendering layer
/// needs. A failed mutation leaves the rows untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAdapter {
    items: Vec<Item>,
}

impl ListAdapter {
    /// Create an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter holding `items`.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Append rows to the end of the list.
    ///
    /// Empty input leaves the rows unchanged. Every row is treated as
    /// dirty afterwards, so this always reports a full refresh.
    pub fn append_items<I>(&mut self, items: I) -> Change
    where
        I: IntoIterator<Item = Item>,
    {
        let before = self.items.len();
        self.items.extend(items);
        debug!(
            "Appended {} items ({} total)",
            self.items.len() - before,
            self.items.len()
        );
        Change::FullRefresh
    }

    /// Replace every row with `items`.
    ///
    /// There is no "absent" input here: an empty iterator clears the list
    /// and still reports a full refresh. Callers that want to keep the
    /// current rows when they have nothing to load should not call this.
    pub fn replace_items<I>(&mut self, items: I) -> Change
    where
        I: IntoIterator<Item = Item>,
    {
        self.items.clear();
        self.append_items(items)
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Number of rows.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The row at `position`.
    pub fn item_at(&self, position: usize) -> Result<&Item, AdapterError> {
        self.items
            .get(position)
            .ok_or(AdapterError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            })
    }

    /// All rows in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Row labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::label)
    }

    // -------------------------------------------------------------------------
    // Gesture mutations
    // -------------------------------------------------------------------------

    /// Exchange the rows at `from` and `to`.
    ///
    /// This is a single pairwise swap: for non-adjacent positions the rows
    /// in between keep their places.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<Change, AdapterError> {
        self.check_index(from)?;
        self.check_index(to)?;

        self.items.swap(from, to);
        debug!("Moved item {} -> {}", from, to);
        Ok(Change::Moved { from, to })
    }

    /// Remove the row at `position`.
    pub fn dismiss_item(&mut self, position: usize) -> Result<Change, AdapterError> {
        self.check_index(position)?;

        let item = self.items.remove(position);
        debug!("Dismissed item {} ({})", position, item);
        Ok(Change::Removed { position })
    }

    fn check_index(&self, index: usize) -> Result<(), AdapterError> {
        if index < self.items.len() {
            Ok(())
        } else {
            warn!(
                "Rejected index {} for list of length {}",
                index,
                self.items.len()
            );
            Err(AdapterError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
