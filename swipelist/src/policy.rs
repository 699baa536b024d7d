//! Gesture policy: which rows may be dragged or swiped, and in which
//! directions.
//!
//! Gesture recognition itself belongs to the host. The host asks the
//! [`TouchCallback`] whether a gesture is allowed and, once a gesture
//! completes, hands it the resulting positions.

use std::ops::BitOr;

use log::debug;

use crate::change::Change;
use crate::error::AdapterError;
use crate::target::TouchTarget;

/// A single gesture direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A set of [`Direction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1);
    pub const DOWN: Self = Self(1 << 1);
    pub const LEFT: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);
    pub const VERTICAL: Self = Self(Self::UP.0 | Self::DOWN.0);
    pub const HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    pub const ALL: Self = Self(Self::VERTICAL.0 | Self::HORIZONTAL.0);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every direction in `other` is in this set.
    pub const fn contains(self, other: Directions) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl BitOr for Directions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Allowed drag and swipe directions for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementFlags {
    pub drag: Directions,
    pub swipe: Directions,
}

/// How rows are arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListLayout {
    /// One row per line, scrolling vertically.
    #[default]
    Linear,
    /// Rows flow into a fixed number of columns.
    Grid { columns: usize },
}

impl ListLayout {
    /// Position distance between vertically adjacent rows.
    ///
    /// A grid with zero columns is treated as a single column.
    pub fn stride(&self) -> usize {
        match self {
            ListLayout::Linear => 1,
            ListLayout::Grid { columns } => (*columns).max(1),
        }
    }
}

/// Drag and swipe toggles plus the layout they apply to.
///
/// Both gestures start disabled; the host opts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GesturePolicy {
    drag_enabled: bool,
    swipe_enabled: bool,
    layout: ListLayout,
}

impl GesturePolicy {
    pub fn new(layout: ListLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    pub fn with_swipe(mut self, enabled: bool) -> Self {
        self.swipe_enabled = enabled;
        self
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn is_swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    /// Flip the drag toggle, returning the new state.
    pub fn toggle_drag(&mut self) -> bool {
        self.drag_enabled = !self.drag_enabled;
        self.drag_enabled
    }

    /// Flip the swipe toggle, returning the new state.
    pub fn toggle_swipe(&mut self) -> bool {
        self.swipe_enabled = !self.swipe_enabled;
        self.swipe_enabled
    }

    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ListLayout) {
        self.layout = layout;
    }

    /// Directions a row may currently be dragged or swiped in.
    ///
    /// A linear list drags vertically and swipes horizontally. A grid drags
    /// in every direction and never swipes.
    pub fn movement_flags(&self) -> MovementFlags {
        let (drag, swipe) = match self.layout {
            ListLayout::Linear => (Directions::VERTICAL, Directions::HORIZONTAL),
            ListLayout::Grid { .. } => (Directions::ALL, Directions::NONE),
        };

        MovementFlags {
            drag: if self.drag_enabled { drag } else { Directions::NONE },
            swipe: if self.swipe_enabled { swipe } else { Directions::NONE },
        }
    }
}

/// Forwards completed gestures to a [`TouchTarget`] when the policy
/// allows them.
///
/// `Ok(None)` means the gesture was not allowed and nothing changed.
#[derive(Debug, Clone)]
pub struct TouchCallback<T: TouchTarget> {
    target: T,
    policy: GesturePolicy,
}

impl<T: TouchTarget> TouchCallback<T> {
    pub fn new(target: T, policy: GesturePolicy) -> Self {
        Self { target, policy }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn policy(&self) -> &GesturePolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut GesturePolicy {
        &mut self.policy
    }

    pub fn movement_flags(&self) -> MovementFlags {
        self.policy.movement_flags()
    }

    pub fn is_long_press_drag_enabled(&self) -> bool {
        self.policy.is_drag_enabled()
    }

    pub fn is_item_view_swipe_enabled(&self) -> bool {
        self.policy.is_swipe_enabled()
    }

    /// A drag gesture moved the row at `from` onto `to`.
    pub fn on_move(&mut self, from: usize, to: usize) -> Result<Option<Change>, AdapterError> {
        if self.movement_flags().drag.is_empty() {
            debug!("Drag disabled, ignoring move {} -> {}", from, to);
            return Ok(None);
        }
        self.target.move_item(from, to).map(Some)
    }

    /// A swipe gesture in `direction` dismissed the row at `position`.
    pub fn on_swiped(
        &mut self,
        position: usize,
        direction: Direction,
    ) -> Result<Option<Change>, AdapterError> {
        if !self.movement_flags().swipe.allows(direction) {
            debug!("Swipe {:?} not allowed, ignoring row {}", direction, position);
            return Ok(None);
        }
        self.target.dismiss_item(position).map(Some)
    }
}
