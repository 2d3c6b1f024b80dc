//! Drag-to-reorder for the terminal list
//!
//! Composes the pure pieces from `movable-core` into a working gesture:
//! pointer samples are coalesced to one per frame, turned into a target slot
//! and an autoscroll velocity, and displaced rows slide out of the way.
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Settle curves (linear, cubic, quintic, exponential)
//! - `timing` - Progress and interpolation helpers
//! - `config` - Duration helpers over [`DragConfig`](movable_core::DragConfig)
//!
//! ## Molecular
//! - `settle` - Per-row animated offset implementing `ItemTransform`
//! - `controller` - Gesture state, frame queue and coalesced pointer handling
//!
//! # Usage
//!
//! ```ignore
//! let mut drag = DragController::new(&config.drag);
//!
//! // After layout, before handling input
//! drag.set_layout(ListLayout::measure(&metrics, top, height, scroll));
//!
//! // Mouse down on item 3, then a stream of moves
//! drag.begin(3, sample);
//! drag.pointer_moved(sample);
//!
//! // Once per frame
//! let update = drag.frame();
//! ```

// Atomic
pub mod config;
pub mod easing;
pub mod timing;

// Molecular
pub mod controller;
pub mod settle;

pub use config::DragConfigExt;
pub use controller::{DragController, DragSession, FrameUpdate, ListLayout};
pub use easing::Easing;
pub use settle::SettleOffset;
