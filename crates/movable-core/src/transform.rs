//! Presentation capability for displaced items
//!
//! The core produces offsets; whatever draws the list implements
//! [`ItemTransform`] to show them.

use std::fmt;

/// Something that can be drawn displaced from its layout position
pub trait ItemTransform {
    /// Draw the item shifted by `(x, y)`
    fn set_offset(&mut self, x: f64, y: f64);

    /// Drop any shift and draw at the layout position
    fn clear(&mut self);

    /// Whether a shift is currently applied
    fn is_transformed(&self) -> bool;
}

/// Apply `offset` to `target`, clearing it when `offset` is `None`
pub fn apply_offset<T: ItemTransform + ?Sized>(target: &mut T, offset: Option<(f64, f64)>) {
    match offset {
        Some((x, y)) => target.set_offset(x, y),
        None => target.clear(),
    }
}

/// Settle animation for items sliding into place
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    pub duration_ms: u64,
    pub timing: Option<String>,
}

impl Transition {
    pub fn new(duration_ms: u64, timing: Option<String>) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Zero-length transitions mean "jump"
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Renders as a CSS-style declaration value: `transform 300ms ease-out`
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}ms", self.duration_ms)?;
        if let Some(timing) = self.timing.as_deref().filter(|t| !t.is_empty()) {
            write!(f, " {}", timing)?;
        }
        Ok(())
    }
}
