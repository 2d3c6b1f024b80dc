//! Atomic: duration helpers for drag configuration
//!
//! Extends [`DragConfig`] from movable-core with `Duration` conversions.

use std::time::Duration;

pub use movable_core::{DragConfig, Transition};

use super::easing::Easing;

/// Extension trait for DragConfig with utility methods
pub trait DragConfigExt {
    /// Settle transition length as Duration
    fn transition_duration(&self) -> Duration;

    /// Time between animation frames
    fn frame_duration(&self) -> Duration;

    /// Settle transition as a value (duration plus optional timing name)
    fn transition(&self) -> Transition;

    /// Easing curve named by `transition_timing`
    fn easing(&self) -> Easing;

    /// Whether displaced rows animate instead of jumping
    fn is_animated(&self) -> bool;
}

impl DragConfigExt for DragConfig {
    #[inline]
    fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    #[inline]
    fn frame_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    fn transition(&self) -> Transition {
        Transition::new(self.transition_ms, self.transition_timing.clone())
    }

    fn easing(&self) -> Easing {
        self.transition_timing
            .as_deref()
            .map(Easing::from_name)
            .unwrap_or_default()
    }

    fn is_animated(&self) -> bool {
        !self.transition().is_instant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let config = DragConfig::default();
        assert_eq!(config.frame_duration(), Duration::from_millis(16));

        let config = DragConfig {
            animation_fps: 30,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(33));

        let config = DragConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_transition() {
        let config = DragConfig {
            transition_ms: 120,
            transition_timing: Some("quintic".into()),
            ..Default::default()
        };
        assert_eq!(config.transition_duration(), Duration::from_millis(120));
        assert_eq!(config.transition().to_string(), "transform 120ms quintic");
        assert_eq!(config.easing(), Easing::Quintic);
        assert!(config.is_animated());
    }

    #[test]
    fn test_instant_when_zero() {
        let config = DragConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert!(!config.is_animated());
        assert_eq!(config.easing(), Easing::Cubic);
    }
}
