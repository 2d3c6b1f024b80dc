//! Autoscroll hot zones and speed curve
//!
//! The pointer's depth into a hot zone is mapped onto `e^x - 1`, rescaled so
//! the curve starts at 0 on the zone's inner edge and lands exactly on the
//! speed cap at its outer edge. Slow start, fast finish.

/// Fraction of the viewport extent used as the hot zone at each edge
pub const ZONE_RATIO: f64 = 0.2;

/// Hot zone height for a viewport: 20% of its extent, capped at `max_size`
///
/// Inputs are expected to be non-negative. Rounding is half away from zero.
#[inline]
pub fn zone_height(viewport_size: f64, max_size: f64) -> f64 {
    (viewport_size * ZONE_RATIO).round().min(max_size)
}

/// Linear map of `x` from `[i1, i2]` into `[o1, o2]`
#[inline]
fn scale(x: f64, i1: f64, i2: f64, o1: f64, o2: f64) -> f64 {
    (x - i1) / (i2 - i1) * (o2 - o1) + o1
}

/// Scroll velocity for a pointer `distance` units deep into a hot zone
///
/// `distance` is clamped to `max_distance` and rescaled from
/// `[0, max_distance]` to `[0, ln(max_speed + 1)]`, so that
/// `e^x - 1` reaches exactly `max_speed` at the zone edge. The result is
/// rounded to a whole number. At or past the zone edge the result is
/// `max_speed.round()` exactly; `e^ln(s + 1) - 1` can land a hair under `s`,
/// which would round half-integer caps down.
///
/// `max_speed = 0` gives a flat curve of zeros. `max_distance` must be
/// positive; a zero-sized zone divides by zero and the result is not
/// meaningful. Callers own that check.
///
/// # Examples
///
/// ```
/// use movable_core::speed;
///
/// assert_eq!(speed(0.0, 100.0, 20.0), 0.0);
/// assert_eq!(speed(100.0, 100.0, 20.0), 20.0);
/// assert_eq!(speed(250.0, 100.0, 20.0), 20.0);
/// assert!(speed(50.0, 100.0, 20.0) < 10.0);
/// ```
pub fn speed(distance: f64, max_distance: f64, max_speed: f64) -> f64 {
    if distance >= max_distance {
        return max_speed.round();
    }
    let max_scale = (max_speed + 1.0).ln();
    let scaled = scale(distance, 0.0, max_distance, 0.0, max_scale);
    (scaled.exp() - 1.0).round()
}

/// Signed autoscroll velocity for a pointer along one axis of a viewport
///
/// Negative near the leading edge (scroll back), positive near the trailing
/// edge (scroll forward), zero elsewhere. A pointer past an edge counts as
/// full depth. Returns 0 when the hot zone rounds to nothing.
pub fn edge_velocity(
    pointer: f64,
    viewport_start: f64,
    viewport_size: f64,
    max_zone: f64,
    max_speed: f64,
) -> f64 {
    let zone = zone_height(viewport_size, max_zone);
    if zone <= 0.0 {
        return 0.0;
    }

    let viewport_end = viewport_start + viewport_size;

    if pointer < viewport_start + zone {
        let depth = zone - (pointer - viewport_start);
        -speed(depth, zone, max_speed)
    } else if pointer > viewport_end - zone {
        let depth = pointer - (viewport_end - zone);
        speed(depth, zone, max_speed)
    } else {
        0.0
    }
}
