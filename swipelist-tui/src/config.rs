use swipelist::{DEFAULT_ITEM_COUNT, GesturePolicy, ListLayout};

/// Startup configuration of the terminal host.
///
/// Nothing is read from disk; the toggles can be flipped at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Number of placeholder rows generated at startup and on reload.
    pub item_count: usize,
    pub drag_enabled: bool,
    pub swipe_enabled: bool,
    pub layout: ListLayout,
    /// Columns used when switching to the grid layout at runtime.
    pub grid_columns: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            drag_enabled: true,
            swipe_enabled: true,
            layout: ListLayout::Linear,
            grid_columns: 3,
        }
    }
}

impl HostConfig {
    /// The layout `v` switches to from `current`.
    pub fn other_layout(&self, current: ListLayout) -> ListLayout {
        match current {
            ListLayout::Linear => ListLayout::Grid {
                columns: self.grid_columns,
            },
            ListLayout::Grid { .. } => ListLayout::Linear,
        }
    }

    pub fn policy(&self) -> GesturePolicy {
        GesturePolicy::new(self.layout)
            .with_drag(self.drag_enabled)
            .with_swipe(self.swipe_enabled)
    }
}
