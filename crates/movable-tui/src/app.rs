use std::time::Instant;

use movable_core::{
    apply_offset, move_item, remove_item, AppConfig, BoxMetrics, ItemTransform, PointerSample,
};
use tracing::debug;

use crate::drag::{DragController, DragSession, ListLayout, SettleOffset};
use crate::theme::Theme;

/// Row heights cycled through by the demo list
const DEMO_HEIGHTS: [u16; 5] = [1, 2, 3, 1, 2];

/// One entry in the list
#[derive(Debug, Clone)]
pub struct Item {
    pub label: String,
    /// Height in terminal rows, at least 1
    pub rows: u16,
    /// Displacement while another item is dragged past
    pub offset: SettleOffset,
}

impl Item {
    pub fn new(label: impl Into<String>, rows: u16, offset: SettleOffset) -> Self {
        Self {
            label: label.into(),
            rows: rows.max(1),
            offset,
        }
    }

    pub fn metrics(&self) -> BoxMetrics {
        BoxMetrics::plain(self.rows as f64)
    }
}

impl ItemTransform for Item {
    fn set_offset(&mut self, x: f64, y: f64) {
        self.offset.set_offset(x, y);
    }

    fn clear(&mut self) {
        self.offset.clear();
    }

    fn is_transformed(&self) -> bool {
        self.offset.is_transformed()
    }
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub items: Vec<Item>,
    pub selected: usize,
    /// Content rows scrolled past the top of the list area
    pub scroll: f64,
    /// Screen row of the list's first visible line
    pub list_top: u16,
    /// Visible list rows
    pub list_height: u16,
    pub drag: DragController,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme, entries: Vec<(String, u16)>) -> Self {
        let settle = SettleOffset::from_config(&config.drag);
        let items = entries
            .into_iter()
            .map(|(label, rows)| Item::new(label, rows, settle.clone()))
            .collect();
        let drag = DragController::new(&config.drag);

        let mut app = Self {
            config,
            theme,
            items,
            selected: 0,
            scroll: 0.0,
            list_top: 0,
            list_height: 0,
            drag,
            status_message: None,
            should_quit: false,
        };
        app.relayout();
        app
    }

    /// A list of `count` numbered items with mixed heights
    pub fn demo(config: AppConfig, theme: Theme, count: usize) -> Self {
        let entries = (0..count)
            .map(|i| {
                let rows = DEMO_HEIGHTS[i % DEMO_HEIGHTS.len()];
                (format!("Item {}", i + 1), rows)
            })
            .collect();
        Self::new(config, theme, entries)
    }

    /// Current geometry, as the drag controller sees it
    pub fn layout(&self) -> ListLayout {
        let metrics: Vec<BoxMetrics> = self.items.iter().map(Item::metrics).collect();
        ListLayout::measure(
            &metrics,
            self.list_top as f64,
            self.list_height as f64,
            self.scroll,
        )
    }

    /// Push fresh geometry to the drag controller
    fn relayout(&mut self) {
        let layout = self.layout();
        self.scroll = self.scroll.clamp(0.0, layout.max_scroll());
        let layout = ListLayout {
            scroll: self.scroll,
            ..layout
        };
        self.drag.set_layout(layout);
    }

    /// Record where the list is drawn
    pub fn set_list_area(&mut self, top: u16, height: u16) {
        if top != self.list_top || height != self.list_height {
            self.list_top = top;
            self.list_height = height;
            self.relayout();
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    /// Whether the host should run frames at animation rate
    pub fn needs_frame(&self) -> bool {
        self.drag.needs_frame() || self.items.iter().any(|item| item.offset.is_settling())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // Keyboard

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
            self.ensure_selected_visible();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_selected_visible();
        }
    }

    /// Move the selected item by `delta` places
    pub fn move_selected(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() as isize - 1;
        let to = (self.selected as isize + delta).clamp(0, last);
        if to as usize == self.selected {
            return;
        }

        self.items = move_item(&self.items, self.selected, to);
        debug!(from = self.selected, to, "moved item");
        self.selected = to as usize;
        self.set_status(format!("Moved to position {}", self.selected + 1));
        self.relayout();
        self.ensure_selected_visible();
    }

    pub fn delete_selected(&mut self) {
        let Some(item) = self.items.get(self.selected) else {
            return;
        };
        let label = item.label.clone();

        self.items = remove_item(&self.items, self.selected);
        debug!(index = self.selected, "removed item");
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.set_status(format!("Removed {}", label));
        self.relayout();
    }

    /// Scroll the list by whole rows
    pub fn scroll_by(&mut self, rows: f64) {
        self.scroll += rows;
        self.relayout();
    }

    fn ensure_selected_visible(&mut self) {
        let layout = self.layout();
        let (Some(&top), Some(&pitch)) = (
            layout.boundaries.get(self.selected),
            layout.pitches.get(self.selected),
        ) else {
            return;
        };

        let view = self.list_height as f64;
        if top < self.scroll {
            self.scroll = top;
        } else if top + pitch > self.scroll + view {
            self.scroll = top + pitch - view;
        }
        self.relayout();
    }

    // Pointer

    /// Mouse down: lift the item under the pointer
    pub fn press(&mut self, sample: PointerSample) {
        if self.is_dragging() {
            return;
        }
        let Some(index) = self.layout().hit(sample.y) else {
            return;
        };
        self.selected = index;
        if self.drag.begin(index, sample) {
            self.set_status(format!("Dragging {}", self.items[index].label));
        }
    }

    pub fn pointer_moved(&mut self, sample: PointerSample) {
        self.drag.pointer_moved(sample);
    }

    /// Mouse up: commit the drop
    pub fn release(&mut self) {
        let Some((from, to)) = self.drag.release() else {
            return;
        };

        for item in &mut self.items {
            apply_offset(item, None);
        }

        if from != to {
            self.items = move_item(&self.items, from, to as isize);
            self.set_status(format!("Moved to position {}", to + 1));
        } else {
            self.status_message = None;
        }
        self.selected = to;
        self.relayout();
    }

    /// Abandon the drag; displaced rows slide back
    pub fn cancel_drag(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.drag.cancel();
        for item in &mut self.items {
            apply_offset(item, Some((0.0, 0.0)));
        }
        self.set_status("Drag cancelled");
    }

    // Frames

    /// Advance one frame. Returns true while more frames are needed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let update = self.drag.frame();

        if update.scroll_delta != 0.0 {
            self.scroll += update.scroll_delta;
            self.relayout();
        }

        if let Some(session) = self.drag.session() {
            for (i, item) in self.items.iter_mut().enumerate() {
                apply_offset(item, Some((0.0, session.shift_for(i))));
            }
        }

        let mut settling = false;
        for item in &mut self.items {
            settling |= item.offset.tick(now);
        }

        settling || self.drag.needs_frame()
    }
}
