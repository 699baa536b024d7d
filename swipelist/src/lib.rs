//! Reorderable, dismissible list model
//!
//! Holds the ordered rows of a list view and applies drag-reorder and
//! swipe-dismiss mutations on behalf of a gesture host. Every mutation
//! returns a [`Change`] describing what the rendering layer has to redraw.

pub mod adapter;
pub mod change;
pub mod error;
pub mod item;
pub mod policy;
pub mod target;

pub use adapter::ListAdapter;
pub use change::Change;
pub use error::AdapterError;
pub use item::{DEFAULT_ITEM_COUNT, Item, placeholder_items, placeholder_label};
pub use policy::{Direction, Directions, GesturePolicy, ListLayout, MovementFlags, TouchCallback};
pub use target::TouchTarget;
