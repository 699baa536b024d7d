//! Change notifications for the rendering layer.

use std::fmt;

/// What the rendering layer has to redraw after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Every row may have changed.
    FullRefresh,
    /// The rows at `from` and `to` exchanged places.
    Moved { from: usize, to: usize },
    /// The row at `position` was removed; later rows shifted up by one.
    Removed { position: usize },
}

impl Change {
    /// Net change in row count caused by this notification, if known
    /// without consulting the list.
    pub fn row_delta(&self) -> Option<isize> {
        match self {
            Change::FullRefresh => None,
            Change::Moved { .. } => Some(0),
            Change::Removed { .. } => Some(-1),
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::FullRefresh => write!(f, "full refresh"),
            Change::Moved { from, to } => write!(f, "moved {} -> {}", from, to),
            Change::Removed { position } => write!(f, "removed {}", position),
        }
    }
}
