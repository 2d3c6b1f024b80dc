//! Molecular: drag gesture controller
//!
//! Pointer moves arrive far more often than the list can redraw. Each move
//! goes through a [`FrameCoalescer`] so only the latest sample is processed,
//! once per frame, when the host flushes the [`FrameQueue`].

use std::cell::RefCell;
use std::rc::Rc;

use movable_core::{
    boundaries, edge_velocity, locate, sibling_shift, translate_offset, BoxMetrics, DragConfig,
    FrameCoalescer, FrameQueue, FrameScheduler, PointerSample,
};
use tracing::{debug, trace};

/// Measured list geometry along the vertical axis, in terminal rows
///
/// Content coordinates start at the top of the first item; screen
/// coordinates are terminal rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListLayout {
    /// Content offset of each item's top edge
    pub boundaries: Vec<f64>,
    /// Distance each item occupies, margins included
    pub pitches: Vec<f64>,
    /// Screen row of the list's top edge
    pub viewport_start: f64,
    /// Visible rows
    pub viewport_size: f64,
    /// Content offset shown at `viewport_start`
    pub scroll: f64,
}

impl ListLayout {
    pub fn measure(items: &[BoxMetrics], viewport_start: f64, viewport_size: f64, scroll: f64) -> Self {
        Self {
            boundaries: boundaries(items, 0.0),
            pitches: items.iter().map(translate_offset).collect(),
            viewport_start,
            viewport_size,
            scroll,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn content_size(&self) -> f64 {
        self.pitches.iter().sum()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_size() - self.viewport_size).max(0.0)
    }

    /// Screen row to content offset
    #[inline]
    pub fn to_content(&self, screen: f64) -> f64 {
        screen - self.viewport_start + self.scroll
    }

    /// Content offset to screen row
    #[inline]
    pub fn to_screen(&self, content: f64) -> f64 {
        content - self.scroll + self.viewport_start
    }

    /// Item under a screen row, if any
    pub fn hit(&self, screen: f64) -> Option<usize> {
        if screen < self.viewport_start || screen >= self.viewport_start + self.viewport_size {
            return None;
        }
        let content = self.to_content(screen);
        if content < 0.0 || content >= self.content_size() {
            return None;
        }
        locate(&self.boundaries, content)
    }

    /// Content span `(top, height)` the dragged item will occupy if dropped now
    ///
    /// Siblings between `from` and `target` shift by the dragged pitch, so the
    /// gap opens below the target when moving down and at it when moving up.
    pub fn drop_gap(&self, session: &DragSession) -> Option<(f64, f64)> {
        let &target_top = self.boundaries.get(session.target)?;
        let top = if session.target > session.from {
            target_top + self.pitches.get(session.target)? - session.pitch
        } else {
            target_top
        };
        Some((top, session.pitch))
    }

    /// Slot the dragged item would land in with the pointer at `screen`
    ///
    /// Above the first item clamps to the first slot.
    fn slot_at(&self, screen: f64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let slot = locate(&self.boundaries, self.to_content(screen)).unwrap_or(0);
        Some(slot.min(self.len() - 1))
    }
}

/// One drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index the item was lifted from
    pub from: usize,
    /// Slot it would be dropped into right now
    pub target: usize,
    /// Pointer offset from the item's top edge at grab time
    pub grab_offset: f64,
    /// Latest processed pointer sample
    pub pointer: PointerSample,
    /// How far siblings move to make room
    pub pitch: f64,
}

impl DragSession {
    /// Displacement of the sibling at `index` for the current target
    #[inline]
    pub fn shift_for(&self, index: usize) -> f64 {
        sibling_shift(index, self.from, self.target, self.pitch)
    }
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameUpdate {
    /// Callbacks run by the frame queue
    pub fired: usize,
    /// Drop slot after this frame, when dragging
    pub target: Option<usize>,
    /// Rows to scroll the list by
    pub scroll_delta: f64,
}

#[derive(Debug, Default)]
struct Tracking {
    session: Option<DragSession>,
    layout: ListLayout,
    velocity: f64,
    max_zone: f64,
    max_speed: f64,
}

impl Tracking {
    fn on_pointer(&mut self, sample: PointerSample) {
        let Some(slot) = self.layout.slot_at(sample.y) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.pointer = sample;
        if session.target != slot {
            trace!(from = session.from, target = slot, "drop slot changed");
            session.target = slot;
        }

        self.velocity = edge_velocity(
            sample.y,
            self.layout.viewport_start,
            self.layout.viewport_size,
            self.max_zone,
            self.max_speed,
        );
    }
}

/// Drives a drag from mouse-down to drop
pub struct DragController {
    frames: Rc<FrameQueue>,
    moves: FrameCoalescer<PointerSample>,
    tracking: Rc<RefCell<Tracking>>,
}

impl DragController {
    pub fn new(config: &DragConfig) -> Self {
        let frames = Rc::new(FrameQueue::new());
        let tracking = Rc::new(RefCell::new(Tracking {
            max_zone: config.max_zone_size,
            max_speed: config.max_speed,
            ..Default::default()
        }));

        let sink = Rc::clone(&tracking);
        let scheduler: Rc<dyn FrameScheduler> = frames.clone();
        let moves = FrameCoalescer::new(scheduler, move |sample: PointerSample| {
            sink.borrow_mut().on_pointer(sample);
        });

        Self {
            frames,
            moves,
            tracking,
        }
    }

    /// Replace the measured geometry
    ///
    /// During a drag the last pointer sample is replayed so the drop slot
    /// follows content that scrolled under a still pointer.
    pub fn set_layout(&mut self, layout: ListLayout) {
        let replay = {
            let mut tracking = self.tracking.borrow_mut();
            tracking.layout = layout;
            tracking.session.map(|s| s.pointer)
        };
        if let Some(sample) = replay {
            self.moves.call(sample);
        }
    }

    pub fn layout(&self) -> ListLayout {
        self.tracking.borrow().layout.clone()
    }

    /// Lift the item at `index` under `sample`
    ///
    /// Returns false when `index` is not part of the current layout.
    pub fn begin(&mut self, index: usize, sample: PointerSample) -> bool {
        let mut tracking = self.tracking.borrow_mut();
        let layout = &tracking.layout;
        let (Some(&top), Some(&pitch)) = (layout.boundaries.get(index), layout.pitches.get(index))
        else {
            return false;
        };

        let session = DragSession {
            from: index,
            target: index,
            grab_offset: layout.to_content(sample.y) - top,
            pointer: sample,
            pitch,
        };
        debug!(index, pitch, "drag started");
        tracking.session = Some(session);
        tracking.velocity = 0.0;
        true
    }

    /// Queue a pointer move; processed on the next frame
    pub fn pointer_moved(&self, sample: PointerSample) {
        if self.is_dragging() {
            self.moves.call(sample);
        }
    }

    /// Run queued frame callbacks and work out autoscroll
    pub fn frame(&mut self) -> FrameUpdate {
        let fired = self.frames.run_frame();

        let tracking = self.tracking.borrow();
        let Some(session) = tracking.session else {
            return FrameUpdate {
                fired,
                ..Default::default()
            };
        };

        let layout = &tracking.layout;
        let mut scroll_delta = 0.0;
        if tracking.velocity != 0.0 {
            let next = (layout.scroll + tracking.velocity).clamp(0.0, layout.max_scroll());
            scroll_delta = next - layout.scroll;
            if scroll_delta != 0.0 {
                trace!(velocity = tracking.velocity, scroll_delta, "autoscroll");
            }
        }

        FrameUpdate {
            fired,
            target: Some(session.target),
            scroll_delta,
        }
    }

    /// Drop the item. Returns `(from, to)` when a drag was active.
    pub fn release(&mut self) -> Option<(usize, usize)> {
        let mut tracking = self.tracking.borrow_mut();
        tracking.velocity = 0.0;
        let session = tracking.session.take()?;
        debug!(from = session.from, to = session.target, "drag dropped");
        Some((session.from, session.target))
    }

    /// Abandon the drag, leaving the list unchanged
    pub fn cancel(&mut self) {
        let mut tracking = self.tracking.borrow_mut();
        tracking.velocity = 0.0;
        if let Some(session) = tracking.session.take() {
            debug!(from = session.from, "drag cancelled");
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.tracking.borrow().session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.tracking.borrow().session
    }

    /// Current autoscroll velocity in rows per frame
    pub fn velocity(&self) -> f64 {
        self.tracking.borrow().velocity
    }

    /// Whether the host should keep producing frames
    pub fn needs_frame(&self) -> bool {
        self.is_dragging() || !self.frames.is_idle()
    }

    /// Screen row for the top of the floating item
    pub fn ghost_top(&self) -> Option<f64> {
        self.session().map(|s| s.pointer.y - s.grab_offset)
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("frames", &self.frames)
            .field("moves", &self.moves)
            .field("session", &self.session())
            .finish()
    }
}
