//! Pointer samples handed in by the host
//!
//! The core never looks at raw events. Hosts classify their input and pass a
//! [`PointerSample`] with plain coordinates.

use serde::{Deserialize, Serialize};

/// Kind of device that produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// One pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    pub fn mouse(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Mouse, x, y)
    }

    /// Coordinate along the list axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// Direction a list is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// True for samples that came from a touch contact
#[inline]
pub fn is_touch(sample: &PointerSample) -> bool {
    sample.kind == PointerKind::Touch
}
