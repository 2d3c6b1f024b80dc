//! Geometry and scheduling core for drag-to-reorder lists.
//!
//! Everything in here is plain numbers in, plain numbers (or new vectors) out.
//! The only stateful piece is [`FrameCoalescer`], which throttles a callback to
//! one invocation per animation frame.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod list;
pub mod schedule;
pub mod transform;

pub use config::{AppConfig, DragConfig, GeneralConfig, UiConfig};
pub use error::{Error, Result};
pub use geometry::autoscroll::{edge_velocity, speed, zone_height};
pub use geometry::offset::{boundaries, sibling_shift, translate_offset, BoxMetrics};
pub use geometry::slot::{locate, slot_to_raw};
pub use input::{is_touch, Axis, PointerKind, PointerSample};
pub use list::{move_item, remove_item};
pub use schedule::{FrameCoalescer, FrameQueue, FrameScheduler, FrameToken};
pub use transform::{apply_offset, ItemTransform, Transition};
