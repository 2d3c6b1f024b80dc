//! Per-frame call coalescing
//!
//! Wraps a callback so that any number of calls between two frame boundaries
//! collapse into one invocation carrying the last call's arguments. Earlier
//! arguments in the same frame are dropped, not queued.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::frame::{FrameScheduler, FrameToken};

struct CoalescerState<A> {
    /// Arguments of the most recent call
    last_args: Option<A>,
    /// A frame has been requested and has not fired yet
    pending: bool,
    /// Token of the outstanding request, once the scheduler has returned it
    frame: Option<FrameToken>,
}

struct Shared<A> {
    state: RefCell<CoalescerState<A>>,
    callback: RefCell<Box<dyn FnMut(A)>>,
}

impl<A> Shared<A> {
    fn fire(&self) {
        let args = {
            let mut state = self.state.borrow_mut();
            state.pending = false;
            state.frame = None;
            state.last_args.take()
        };

        if let Some(args) = args {
            let mut callback = self.callback.borrow_mut();
            (*callback)(args);
        }
    }
}

/// Callback wrapper limited to one run per animation frame
///
/// Each instance owns its own pending flag and argument slot, so two lists
/// dragging at once never share a frame request. A scheduled run cannot be
/// withdrawn; it fires on the next frame even if the coalescer is dropped
/// in between.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use movable_core::{FrameCoalescer, FrameQueue};
///
/// let frames = Rc::new(FrameQueue::new());
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let on_move = FrameCoalescer::new(frames.clone(), move |y: f64| sink.borrow_mut().push(y));
///
/// on_move.call(10.0);
/// on_move.call(12.0);
/// on_move.call(15.0);
/// assert!(seen.borrow().is_empty());
///
/// frames.run_frame();
/// assert_eq!(*seen.borrow(), vec![15.0]);
/// ```
pub struct FrameCoalescer<A: 'static> {
    shared: Rc<Shared<A>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl<A: 'static> FrameCoalescer<A> {
    /// Wrap `callback`, requesting frames from `scheduler`
    pub fn new(scheduler: Rc<dyn FrameScheduler>, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(CoalescerState {
                    last_args: None,
                    pending: false,
                    frame: None,
                }),
                callback: RefCell::new(Box::new(callback)),
            }),
            scheduler,
        }
    }

    /// Record `args` and make sure a frame is on the way
    ///
    /// Requests a frame only when none is outstanding; otherwise the new
    /// arguments simply replace the old ones.
    pub fn call(&self, args: A) {
        {
            let mut state = self.shared.state.borrow_mut();
            state.last_args = Some(args);
            if state.pending {
                return;
            }
            state.pending = true;
        }

        let shared = Rc::clone(&self.shared);
        let token = self.scheduler.request_frame(Box::new(move || shared.fire()));
        trace!(%token, "coalescer requested frame");

        let mut state = self.shared.state.borrow_mut();
        if state.pending {
            state.frame = Some(token);
        }
    }

    /// True while a frame is requested and has not fired
    pub fn is_pending(&self) -> bool {
        self.shared.state.borrow().pending
    }

    /// Token of the outstanding frame request, if any
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.shared.state.borrow().frame
    }
}

impl<A: 'static> fmt::Debug for FrameCoalescer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCoalescer")
            .field("pending", &self.is_pending())
            .field("frame", &self.pending_frame())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::frame::{FrameCallback, FrameQueue};
    use std::cell::Cell;

    fn recorder<A: 'static>() -> (Rc<RefCell<Vec<A>>>, impl FnMut(A) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |args| sink.borrow_mut().push(args))
    }

    /// Scheduler that counts requests and otherwise defers to a queue
    struct CountingScheduler {
        queue: FrameQueue,
        requests: Cell<usize>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self, callback: FrameCallback) -> FrameToken {
            self.requests.set(self.requests.get() + 1);
            self.queue.request_frame(callback)
        }
    }

    #[test]
    fn test_burst_collapses_to_last_args() {
        let frames = Rc::new(FrameQueue::new());
        let (log, callback) = recorder::<(i32, i32)>();
        let coalescer = FrameCoalescer::new(frames.clone(), callback);

        for i in 0..10 {
            coalescer.call((i, i * 2));
        }
        assert!(log.borrow().is_empty());
        assert_eq!(frames.pending(), 1);

        frames.run_frame();
        assert_eq!(*log.borrow(), vec![(9, 18)]);
    }

    #[test]
    fn test_one_request_per_batch() {
        let scheduler = Rc::new(CountingScheduler {
            queue: FrameQueue::new(),
            requests: Cell::new(0),
        });
        let (log, callback) = recorder::<u32>();
        let coalescer = FrameCoalescer::new(scheduler.clone(), callback);

        coalescer.call(1);
        coalescer.call(2);
        assert_eq!(scheduler.requests.get(), 1);
        assert!(coalescer.is_pending());
        assert!(coalescer.pending_frame().is_some());

        scheduler.queue.run_frame();
        assert!(!coalescer.is_pending());
        assert!(coalescer.pending_frame().is_none());

        coalescer.call(3);
        assert_eq!(scheduler.requests.get(), 2);
        scheduler.queue.run_frame();

        assert_eq!(*log.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_idle_frames_do_not_invoke() {
        let frames = Rc::new(FrameQueue::new());
        let (log, callback) = recorder::<u8>();
        let coalescer = FrameCoalescer::new(frames.clone(), callback);

        frames.run_frame();
        coalescer.call(1);
        frames.run_frame();
        frames.run_frame();
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let frames = Rc::new(FrameQueue::new());
        let (left_log, left_cb) = recorder::<&'static str>();
        let (right_log, right_cb) = recorder::<&'static str>();
        let left = FrameCoalescer::new(frames.clone(), left_cb);
        let right = FrameCoalescer::new(frames.clone(), right_cb);

        left.call("l1");
        right.call("r1");
        left.call("l2");
        assert_eq!(frames.pending(), 2);

        frames.run_frame();
        assert_eq!(*left_log.borrow(), vec!["l2"]);
        assert_eq!(*right_log.borrow(), vec!["r1"]);
    }

    #[test]
    fn test_scheduled_frame_fires_after_drop() {
        let frames = Rc::new(FrameQueue::new());
        let (log, callback) = recorder::<i32>();
        let coalescer = FrameCoalescer::new(frames.clone(), callback);

        coalescer.call(5);
        drop(coalescer);
        frames.run_frame();
        assert_eq!(*log.borrow(), vec![5]);
    }
}
