//! Animation frame scheduling seam
//!
//! A [`FrameScheduler`] accepts one deferred callback per request and runs it
//! on its next frame boundary. The host decides what a frame is: a browser
//! animation frame, a terminal redraw tick, or a test stepping by hand.

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::trace;

/// Deferred work handed to a scheduler
pub type FrameCallback = Box<dyn FnOnce()>;

/// Handle for one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Source of animation frames
///
/// Implementations must run every accepted callback exactly once, on a later
/// frame boundary, and never from inside `request_frame` itself.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame
    fn request_frame(&self, callback: FrameCallback) -> FrameToken;
}

/// Frame scheduler stepped explicitly by its owner
///
/// Callbacks requested while a frame is running land in the following frame.
#[derive(Default)]
pub struct FrameQueue {
    next_token: Cell<u64>,
    frames_run: Cell<u64>,
    queued: RefCell<Vec<(FrameToken, FrameCallback)>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.queued.borrow().len()
    }

    /// True when nothing is waiting for a frame
    pub fn is_idle(&self) -> bool {
        self.queued.borrow().is_empty()
    }

    /// Frames run so far
    pub fn frames_run(&self) -> u64 {
        self.frames_run.get()
    }

    /// Cross a frame boundary, running everything queued before it
    ///
    /// Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.queued.borrow_mut());
        let frame = self.frames_run.get() + 1;
        self.frames_run.set(frame);

        let count = batch.len();
        if count > 0 {
            trace!(frame, callbacks = count, "running frame");
        }
        for (_, callback) in batch {
            callback();
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) -> FrameToken {
        let token = FrameToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.queued.borrow_mut().push((token, callback));
        token
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .field("frames_run", &self.frames_run.get())
            .finish()
    }
}
