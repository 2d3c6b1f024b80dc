//! Frame scheduling
//!
//! - `frame` - The [`FrameScheduler`] seam and the host-driven [`FrameQueue`]
//! - `coalesce` - [`FrameCoalescer`], at most one callback per frame with the latest arguments
//!
//! Single-threaded only. State lives in `Rc`/`RefCell`, so nothing here is
//! `Send`; use it from the thread that created it.

pub mod coalesce;
pub mod frame;

pub use coalesce::FrameCoalescer;
pub use frame::{FrameCallback, FrameQueue, FrameScheduler, FrameToken};
