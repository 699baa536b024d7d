//! Host state: the touch callback, the mirrored rows, and the cursor.

use log::{debug, info, warn};
use swipelist::{Change, Direction, ListAdapter, ListLayout, TouchCallback, placeholder_items};

use crate::config::HostConfig;
use crate::keymap::Action;
use crate::mirror::RowMirror;
use crate::terminal::{Line, LineStyle};
use crate::text::fit_to_width;

const HELP: &str = "↑↓ move  shift+arrows drag  ←→/d swipe  g drag  s swipe  v layout  r reload  q quit";

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: HostConfig,
    callback: TouchCallback<ListAdapter>,
    mirror: RowMirror,
    cursor: usize,
    /// First visible screen line.
    offset: usize,
    /// Screen lines visible in the last frame.
    page: usize,
    status: Option<String>,
}

impl App {
    /// Build the startup dataset and wire it to the gesture policy.
    pub fn new(config: HostConfig) -> Self {
        let mut adapter = ListAdapter::new();
        let change = adapter.append_items(placeholder_items(config.item_count));

        let mut mirror = RowMirror::new();
        mirror.apply(change, &adapter);

        info!(
            "Loaded {} items (drag: {}, swipe: {}, layout: {:?})",
            adapter.item_count(),
            config.drag_enabled,
            config.swipe_enabled,
            config.layout
        );

        Self {
            callback: TouchCallback::new(adapter, config.policy()),
            config,
            mirror,
            cursor: 0,
            offset: 0,
            page: 1,
            status: None,
        }
    }

    pub fn adapter(&self) -> &ListAdapter {
        self.callback.target()
    }

    /// Positions per screen line.
    fn stride(&self) -> usize {
        self.callback.policy().layout().stride()
    }

    pub fn handle(&mut self, action: Action) -> Flow {
        debug!("Action: {:?}", action);
        self.status = None;
        let stride = self.stride();

        match action {
            Action::Quit => return Flow::Quit,
            Action::CursorUp => self.set_cursor(self.cursor.saturating_sub(stride)),
            Action::CursorDown => self.set_cursor(self.cursor.saturating_add(stride)),
            Action::CursorPrev => self.set_cursor(self.cursor.saturating_sub(1)),
            Action::CursorNext => self.set_cursor(self.cursor.saturating_add(1)),
            Action::PageUp => self.set_cursor(self.cursor.saturating_sub(self.page * stride)),
            Action::PageDown => self.set_cursor(self.cursor.saturating_add(self.page * stride)),
            Action::Top => self.set_cursor(0),
            Action::Bottom => self.set_cursor(usize::MAX),
            Action::Drag(direction) => self.drag(direction),
            Action::Swipe(direction) => self.swipe(direction),
            Action::ToggleDrag => {
                let enabled = self.callback.policy_mut().toggle_drag();
                info!("Drag {}", on_off(enabled));
                self.status = Some(format!("drag {}", on_off(enabled)));
            }
            Action::ToggleSwipe => {
                let enabled = self.callback.policy_mut().toggle_swipe();
                info!("Swipe {}", on_off(enabled));
                self.status = Some(format!("swipe {}", on_off(enabled)));
            }
            Action::ToggleLayout => {
                let layout = self.config.other_layout(self.callback.policy().layout());
                self.callback.policy_mut().set_layout(layout);
                self.offset = 0;
                info!("Layout {:?}", layout);
                self.status = Some(format!("layout: {}", layout_name(layout)));
            }
            Action::Reload => {
                let items = placeholder_items(self.config.item_count);
                let change = self.callback.target_mut().replace_items(items);
                self.apply(change);
                self.cursor = 0;
                self.status = Some(format!("reloaded {} items", self.mirror.len()));
            }
        }

        Flow::Continue
    }

    fn drag(&mut self, direction: Direction) {
        let flags = self.callback.movement_flags();
        if flags.drag.is_empty() {
            self.status = Some("drag is disabled".to_string());
            return;
        }
        if !flags.drag.allows(direction) {
            self.status = Some("cannot drag that way".to_string());
            return;
        }

        let from = self.cursor;
        let stride = self.stride();
        let to = match direction {
            Direction::Up => from.checked_sub(stride),
            Direction::Down => from.checked_add(stride),
            // Horizontal drags stay within the grid row
            Direction::Left => from.checked_sub(1).filter(|_| from % stride != 0),
            Direction::Right => Some(from + 1).filter(|to| to % stride != 0),
        };
        let Some(to) = to.filter(|&to| to < self.mirror.len()) else {
            self.status = Some("cannot drag past the edge".to_string());
            return;
        };

        match self.callback.on_move(from, to) {
            Ok(Some(change)) => {
                self.apply(change);
                self.cursor = to;
            }
            Ok(None) => self.status = Some("drag is disabled".to_string()),
            Err(e) => {
                warn!("Move {} -> {} rejected: {}", from, to, e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn swipe(&mut self, direction: Direction) {
        let position = self.cursor;
        let label = self
            .adapter()
            .item_at(position)
            .map(|item| item.label().to_string());

        match self.callback.on_swiped(position, direction) {
            Ok(Some(change)) => {
                self.apply(change);
                self.set_cursor(position);
                if let Ok(label) = label {
                    self.status = Some(format!("dismissed {}", label));
                }
            }
            Ok(None) if self.callback.is_item_view_swipe_enabled() => {
                self.status = Some("cannot swipe that way".to_string());
            }
            Ok(None) => self.status = Some("swipe is disabled".to_string()),
            Err(e) => {
                warn!("Dismiss {} rejected: {}", position, e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn apply(&mut self, change: Change) {
        self.mirror.apply(change, self.callback.target());
        debug!("Applied {} ({} rows)", change, self.mirror.len());
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.mirror.len().saturating_sub(1));
    }

    /// Lay out one screen: title, visible rows, status.
    pub fn frame(&mut self, width: u16, height: u16) -> Vec<Line> {
        let body = (height as usize).saturating_sub(2).max(1);
        let stride = self.stride();
        let total_lines = self.mirror.len().div_ceil(stride);
        self.page = body;
        self.scroll_to_cursor(body, stride, total_lines);

        let policy = self.callback.policy();
        let mut lines = Vec::with_capacity(body + 2);
        lines.push(Line::new(
            format!(
                "swipelist  drag: {}  swipe: {}  layout: {}  {} items",
                on_off(policy.is_drag_enabled()),
                on_off(policy.is_swipe_enabled()),
                layout_name(policy.layout()),
                self.mirror.len()
            ),
            LineStyle::Bold,
        ));

        if self.mirror.is_empty() {
            lines.push(Line::new("  (empty, press r to reload)", LineStyle::Dim));
        }

        let handle = if policy.is_drag_enabled() { '≡' } else { ' ' };
        let cell_width = (width as usize / stride).max(1);
        let last_line = (self.offset + body).min(total_lines);

        for line in self.offset..last_line {
            let start = line * stride;
            let end = (start + stride).min(self.mirror.len());
            let selected = (start..end).contains(&self.cursor);

            let (text, style) = if stride == 1 {
                let style = if selected {
                    LineStyle::Reverse
                } else {
                    LineStyle::Normal
                };
                (self.cell(start, handle), style)
            } else {
                let text = (start..end)
                    .map(|index| fit_to_width(&self.cell(index, handle), cell_width))
                    .collect();
                let style = if selected {
                    LineStyle::Bold
                } else {
                    LineStyle::Normal
                };
                (text, style)
            };
            lines.push(Line::new(text, style));
        }

        while lines.len() < body + 1 {
            lines.push(Line::default());
        }

        lines.push(Line::new(
            self.status.clone().unwrap_or_else(|| HELP.to_string()),
            LineStyle::Dim,
        ));
        lines
    }

    fn cell(&self, index: usize, handle: char) -> String {
        let marker = if index == self.cursor { '>' } else { ' ' };
        format!("{} {} {}", marker, handle, self.mirror.rows()[index])
    }

    fn scroll_to_cursor(&mut self, body: usize, stride: usize, total_lines: usize) {
        let line = self.cursor / stride;
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + body {
            self.offset = line + 1 - body;
        }
        self.offset = self.offset.min(total_lines.saturating_sub(body));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn layout_name(layout: ListLayout) -> &'static str {
    match layout {
        ListLayout::Linear => "list",
        ListLayout::Grid { .. } => "grid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(item_count: usize) -> App {
        App::new(HostConfig {
            item_count,
            ..Default::default()
        })
    }

    fn grid_app(item_count: usize, columns: usize) -> App {
        App::new(HostConfig {
            item_count,
            layout: ListLayout::Grid { columns },
            ..Default::default()
        })
    }

    fn labels(app: &App) -> Vec<&str> {
        app.adapter().labels().collect()
    }

    fn assert_in_sync(app: &App) {
        assert_eq!(app.mirror.len(), app.adapter().item_count());
        assert!(app.mirror.rows().iter().map(String::as_str).eq(app.adapter().labels()));
    }

    #[test]
    fn test_startup_loads_default_dataset() {
        let app = App::new(HostConfig::default());
        assert_eq!(app.adapter().item_count(), 100);
        assert_eq!(app.mirror.rows()[99], "第99个");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_drag_down_carries_cursor() {
        let mut app = app(3);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(labels(&app), ["第1个", "第0个", "第2个"]);
        assert_eq!(app.cursor, 1);
        assert_in_sync(&app);
    }

    #[test]
    fn test_drag_past_edge_is_refused() {
        let mut app = app(3);
        app.handle(Action::Drag(Direction::Up));
        assert_eq!(labels(&app), ["第0个", "第1个", "第2个"]);
        assert_eq!(app.status.as_deref(), Some("cannot drag past the edge"));

        app.handle(Action::Bottom);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(labels(&app), ["第0个", "第1个", "第2个"]);
    }

    #[test]
    fn test_list_refuses_horizontal_drag() {
        let mut app = app(3);
        app.handle(Action::Drag(Direction::Right));
        assert_eq!(labels(&app), ["第0个", "第1个", "第2个"]);
        assert_eq!(app.status.as_deref(), Some("cannot drag that way"));
    }

    #[test]
    fn test_drag_disabled() {
        let mut app = app(3);
        app.handle(Action::ToggleDrag);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(labels(&app), ["第0个", "第1个", "第2个"]);
        assert_eq!(app.status.as_deref(), Some("drag is disabled"));
    }

    #[test]
    fn test_swipe_last_row_clamps_cursor() {
        let mut app = app(3);
        app.handle(Action::Bottom);
        app.handle(Action::Swipe(Direction::Left));
        assert_eq!(labels(&app), ["第0个", "第1个"]);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.status.as_deref(), Some("dismissed 第2个"));
        assert_in_sync(&app);
    }

    #[test]
    fn test_swipe_disabled() {
        let mut app = app(3);
        app.handle(Action::ToggleSwipe);
        app.handle(Action::Swipe(Direction::Right));
        assert_eq!(app.adapter().item_count(), 3);
        assert_eq!(app.status.as_deref(), Some("swipe is disabled"));
    }

    #[test]
    fn test_swipe_on_empty_list_reports_error() {
        let mut app = app(1);
        app.handle(Action::Swipe(Direction::Right));
        assert!(app.mirror.is_empty());

        app.handle(Action::Swipe(Direction::Right));
        assert_eq!(
            app.status.as_deref(),
            Some("index 0 out of range for list of length 0")
        );
    }

    #[test]
    fn test_reload_restores_dataset() {
        let mut app = app(4);
        app.handle(Action::Swipe(Direction::Right));
        app.handle(Action::Drag(Direction::Down));
        app.handle(Action::Reload);
        assert_eq!(labels(&app), ["第0个", "第1个", "第2个", "第3个"]);
        assert_eq!(app.cursor, 0);
        assert_in_sync(&app);
    }

    #[test]
    fn test_quit() {
        let mut app = app(1);
        assert_eq!(app.handle(Action::CursorDown), Flow::Continue);
        assert_eq!(app.handle(Action::Quit), Flow::Quit);
    }

    // ------------------------------------------------------------------------
    // Grid layout
    // ------------------------------------------------------------------------

    #[test]
    fn test_grid_drag_down_moves_one_row() {
        let mut app = grid_app(6, 3);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(
            labels(&app),
            ["第3个", "第1个", "第2个", "第0个", "第4个", "第5个"]
        );
        assert_eq!(app.cursor, 3);
        assert_in_sync(&app);
    }

    #[test]
    fn test_grid_drag_right_moves_one_column() {
        let mut app = grid_app(6, 3);
        app.handle(Action::Drag(Direction::Right));
        assert_eq!(
            labels(&app),
            ["第1个", "第0个", "第2个", "第3个", "第4个", "第5个"]
        );
        assert_eq!(app.cursor, 1);

        app.handle(Action::Drag(Direction::Left));
        assert_eq!(app.cursor, 0);
        assert_eq!(labels(&app)[..2], ["第0个", "第1个"]);
    }

    #[test]
    fn test_grid_drag_stays_inside_grid() {
        let mut app = grid_app(6, 3);
        app.handle(Action::CursorNext);
        app.handle(Action::CursorNext);
        assert_eq!(app.cursor, 2);

        // Last column cannot move right into the next row
        app.handle(Action::Drag(Direction::Right));
        assert_eq!(app.status.as_deref(), Some("cannot drag past the edge"));

        app.handle(Action::Drag(Direction::Down));
        assert_eq!(app.cursor, 5);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(app.status.as_deref(), Some("cannot drag past the edge"));

        app.handle(Action::CursorPrev);
        app.handle(Action::CursorPrev);
        assert_eq!(app.cursor, 3);
        app.handle(Action::Drag(Direction::Left));
        assert_eq!(app.status.as_deref(), Some("cannot drag past the edge"));
        assert_in_sync(&app);
    }

    #[test]
    fn test_grid_cursor_steps_by_row() {
        let mut app = grid_app(7, 3);
        app.handle(Action::CursorDown);
        assert_eq!(app.cursor, 3);
        app.handle(Action::CursorDown);
        assert_eq!(app.cursor, 6);
        app.handle(Action::CursorDown);
        assert_eq!(app.cursor, 6);
        app.handle(Action::CursorUp);
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_grid_refuses_swipe() {
        let mut app = grid_app(6, 3);
        app.handle(Action::Swipe(Direction::Left));
        assert_eq!(app.adapter().item_count(), 6);
        assert_eq!(app.status.as_deref(), Some("cannot swipe that way"));
    }

    #[test]
    fn test_toggle_layout() {
        let mut app = app(6);
        app.handle(Action::ToggleLayout);
        assert_eq!(
            app.callback.policy().layout(),
            ListLayout::Grid { columns: 3 }
        );
        assert_eq!(app.status.as_deref(), Some("layout: grid"));

        app.handle(Action::CursorDown);
        assert_eq!(app.cursor, 3);

        app.handle(Action::ToggleLayout);
        assert_eq!(app.callback.policy().layout(), ListLayout::Linear);
        app.handle(Action::Drag(Direction::Down));
        assert_eq!(app.cursor, 4);
    }

    // ------------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------------

    #[test]
    fn test_frame_scrolls_to_cursor() {
        let mut app = app(20);
        // Title + 5 rows + status
        let frame = app.frame(40, 7);
        assert_eq!(frame.len(), 7);
        assert_eq!(frame[1].text, "> ≡ 第0个");
        assert_eq!(frame[1].style, LineStyle::Reverse);

        app.handle(Action::PageDown);
        app.handle(Action::PageDown);
        assert_eq!(app.cursor, 10);

        let frame = app.frame(40, 7);
        assert_eq!(frame[5].text, "> ≡ 第10个");
        assert_eq!(frame[1].text, "  ≡ 第6个");
    }

    #[test]
    fn test_frame_shows_toggles() {
        let mut app = app(2);
        app.handle(Action::ToggleSwipe);
        let frame = app.frame(80, 10);
        assert_eq!(
            frame[0].text,
            "swipelist  drag: on  swipe: off  layout: list  2 items"
        );
        assert_eq!(frame.last().map(|l| l.text.as_str()), Some("swipe off"));
    }

    #[test]
    fn test_frame_grid_cells() {
        let mut app = grid_app(6, 3);
        // Title + 3 lines + status
        let frame = app.frame(30, 5);
        assert_eq!(frame.len(), 5);
        // Each cell is padded to a third of the width
        assert_eq!(frame[1].text, "> ≡ 第0个   ≡ 第1个   ≡ 第2个 ");
        assert_eq!(frame[1].style, LineStyle::Bold);
        assert_eq!(frame[2].text, "  ≡ 第3个   ≡ 第4个   ≡ 第5个 ");
        assert_eq!(frame[2].style, LineStyle::Normal);
        assert_eq!(frame[3].text, "");
    }
}
