//! Molecular: animated row offset
//!
//! Each list row owns a [`SettleOffset`]. The drag controller retargets it
//! through [`ItemTransform`], and the render loop advances it with `tick`.

use std::time::{Duration, Instant};

use movable_core::{DragConfig, ItemTransform};

use super::config::DragConfigExt;
use super::easing::Easing;
use super::timing::{is_complete, lerp, progress};

/// Vertical offset that slides toward its target instead of jumping
#[derive(Debug, Clone, PartialEq)]
pub struct SettleOffset {
    from: f64,
    to: f64,
    current: f64,
    /// Stamped on the first tick after a retarget
    start: Option<Instant>,
    duration: Duration,
    easing: Easing,
    transformed: bool,
}

impl Default for SettleOffset {
    fn default() -> Self {
        Self::new(Duration::ZERO, Easing::default())
    }
}

impl SettleOffset {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            current: 0.0,
            start: None,
            duration,
            easing,
            transformed: false,
        }
    }

    pub fn from_config(config: &DragConfig) -> Self {
        if config.is_animated() {
            Self::new(config.transition_duration(), config.easing())
        } else {
            Self::default()
        }
    }

    /// Offset to draw this frame
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Offset the row is heading for
    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Current offset snapped to whole terminal rows
    #[inline]
    pub fn rows(&self) -> i32 {
        self.current.round() as i32
    }

    #[inline]
    pub fn is_settling(&self) -> bool {
        self.current != self.to
    }

    /// Advance toward the target. Returns true while still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_settling() {
            self.start = None;
            return false;
        }

        let start = *self.start.get_or_insert(now);
        if is_complete(start, now, self.duration) {
            self.current = self.to;
            self.from = self.to;
            self.start = None;
            return false;
        }

        let t = self.easing.apply(progress(start, now, self.duration));
        self.current = lerp(self.from, self.to, t);
        true
    }

    fn retarget(&mut self, to: f64) {
        if to == self.to {
            return;
        }
        self.from = self.current;
        self.to = to;
        self.start = None;
        if self.duration.is_zero() {
            self.current = to;
            self.from = to;
        }
    }
}

impl ItemTransform for SettleOffset {
    fn set_offset(&mut self, _x: f64, y: f64) {
        self.retarget(y);
        self.transformed = y != 0.0;
    }

    /// Snap back to the layout position with no animation
    fn clear(&mut self) {
        self.from = 0.0;
        self.to = 0.0;
        self.current = 0.0;
        self.start = None;
        self.transformed = false;
    }

    fn is_transformed(&self) -> bool {
        self.transformed || self.is_settling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated() -> SettleOffset {
        SettleOffset::new(Duration::from_millis(100), Easing::Linear)
    }

    #[test]
    fn test_instant_when_no_duration() {
        let mut offset = SettleOffset::default();
        offset.set_offset(0.0, 3.0);
        assert_eq!(offset.current(), 3.0);
        assert!(!offset.is_settling());
        assert!(offset.is_transformed());
        assert!(!offset.tick(Instant::now()));
    }

    #[test]
    fn test_slides_to_target() {
        let mut offset = animated();
        let t0 = Instant::now();

        offset.set_offset(0.0, -4.0);
        assert_eq!(offset.current(), 0.0);

        // First tick stamps the start
        assert!(offset.tick(t0));
        assert_eq!(offset.current(), 0.0);

        assert!(offset.tick(t0 + Duration::from_millis(50)));
        assert!((offset.current() - -2.0).abs() < 1e-9);
        assert_eq!(offset.rows(), -2);

        assert!(!offset.tick(t0 + Duration::from_millis(100)));
        assert_eq!(offset.current(), -4.0);
        assert!(!offset.is_settling());
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current() {
        let mut offset = animated();
        let t0 = Instant::now();
        offset.set_offset(0.0, 4.0);
        offset.tick(t0);
        offset.tick(t0 + Duration::from_millis(50));

        offset.set_offset(0.0, 0.0);
        let t1 = t0 + Duration::from_millis(60);
        offset.tick(t1);
        assert!((offset.current() - 2.0).abs() < 1e-9);
        offset.tick(t1 + Duration::from_millis(50));
        assert!((offset.current() - 1.0).abs() < 1e-9);

        // Still moving back even though the target is zero
        assert!(offset.is_transformed());
    }

    #[test]
    fn test_from_config_follows_transition() {
        let instant = SettleOffset::from_config(&DragConfig {
            transition_ms: 0,
            ..Default::default()
        });
        assert_eq!(instant, SettleOffset::default());

        let mut animated = SettleOffset::from_config(&DragConfig::default());
        animated.set_offset(0.0, 2.0);
        assert!(animated.is_settling());
    }

    #[test]
    fn test_clear_snaps() {
        let mut offset = animated();
        offset.set_offset(0.0, 5.0);
        offset.tick(Instant::now());
        offset.clear();
        assert_eq!(offset.current(), 0.0);
        assert!(!offset.is_transformed());
    }

    #[test]
    fn test_same_target_keeps_animation() {
        let mut offset = animated();
        let t0 = Instant::now();
        offset.set_offset(0.0, 2.0);
        offset.tick(t0);
        offset.set_offset(0.0, 2.0);
        offset.tick(t0 + Duration::from_millis(50));
        assert!((offset.current() - 1.0).abs() < 1e-9);
    }
}
