//! The rendering side of the change contract.

use log::warn;
use swipelist::{Change, ListAdapter};

/// Copy of the row labels as last told to the screen.
///
/// Rows are only ever updated through [`Change`] notifications, so after
/// every applied change the mirror must match the adapter.
#[derive(Debug, Default)]
pub struct RowMirror {
    rows: Vec<String>,
}

impl RowMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply a change reported by `source`.
    ///
    /// A single-row change that does not fit the mirrored rows falls back
    /// to a full rebuild.
    pub fn apply(&mut self, change: Change, source: &ListAdapter) {
        let before = self.rows.len();

        let applied = match change {
            Change::FullRefresh => false,
            Change::Moved { from, to } if from < before && to < before => {
                self.rows.swap(from, to);
                true
            }
            Change::Removed { position } if position < before => {
                self.rows.remove(position);
                true
            }
            _ => false,
        };

        if !applied {
            if change != Change::FullRefresh {
                warn!("Change {} does not fit {} mirrored rows, rebuilding", change, before);
            }
            self.rows = source.labels().map(str::to_string).collect();
            return;
        }

        if let Some(delta) = change.row_delta()
            && before.checked_add_signed(delta) != Some(source.item_count())
        {
            warn!(
                "Row count drifted after {} ({} rows, {} items), rebuilding",
                change,
                self.rows.len(),
                source.item_count()
            );
            self.rows = source.labels().map(str::to_string).collect();
        }
    }
}
