//! List rows.

use std::fmt;

/// Number of rows generated for the startup dataset.
pub const DEFAULT_ITEM_COUNT: usize = 100;

/// A single labeled row.
///
/// Items carry no identity of their own; a row is addressed by its
/// current position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item(String);

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The text shown for this row.
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn into_label(self) -> String {
        self.0
    }
}

impl From<&str> for Item {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Item {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of the placeholder row at `index` ("第0个", "第1个", ...).
pub fn placeholder_label(index: usize) -> String {
    format!("第{index}个")
}

/// Generate `count` placeholder rows labeled with their ordinal.
pub fn placeholder_items(count: usize) -> Vec<Item> {
    (0..count).map(|i| Item::new(placeholder_label(i))).collect()
}
