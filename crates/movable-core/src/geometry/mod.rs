//! Pure geometry for drag gestures
//!
//! # Layers
//!
//! - `slot` - Which boundary interval a pointer coordinate falls into
//! - `autoscroll` - Hot zone sizing and the exponential autoscroll speed curve
//! - `offset` - Item pitch, cumulative boundaries and sibling displacement
//!
//! All functions here are total over their documented preconditions and keep
//! no state between calls.

pub mod autoscroll;
pub mod offset;
pub mod slot;

pub use autoscroll::{edge_velocity, speed, zone_height, ZONE_RATIO};
pub use offset::{boundaries, sibling_shift, translate_offset, BoxMetrics};
pub use slot::{locate, slot_to_raw};
