//! Atomic: time helpers for row settle animations
//!
//! Callers pass `now` explicitly so frames stay deterministic under test.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation begun at `start`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation begun at `start` has finished by `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-4.0, 4.0, 1.0) - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, start, duration), 0.0);
        assert!((progress(start, start + Duration::from_millis(50), duration) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, start + Duration::from_secs(5), duration), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
        assert!(is_complete(start, start, Duration::ZERO));
    }

    #[test]
    fn test_now_before_start_is_zero() {
        let start = Instant::now() + Duration::from_millis(10);
        let earlier = start - Duration::from_millis(10);
        assert_eq!(progress(start, earlier, Duration::from_millis(100)), 0.0);
        assert!(!is_complete(start, earlier, Duration::from_millis(100)));
    }
}
